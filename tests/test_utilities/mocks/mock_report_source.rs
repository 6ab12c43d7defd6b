use dependency_explorer::prelude::*;

/// Mock ReportSource serving in-memory snapshots
#[derive(Default)]
pub struct MockReportSource {
    reports: Vec<DependencyReport>,
    findings: Vec<Finding>,
    should_fail: bool,
}

impl MockReportSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, module: &str, roots: Vec<RawArtifact>) -> Self {
        self.reports.push(DependencyReport::single(module, roots));
        self
    }

    pub fn with_finding(mut self, key: &str, rule: &str, message: &str, component: &str) -> Self {
        self.findings.push(Finding::new(key, rule, message, component));
        self
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl ReportSource for MockReportSource {
    fn read_reports(&self) -> Result<Vec<DependencyReport>> {
        if self.should_fail {
            anyhow::bail!("Mock report source failure");
        }
        Ok(self.reports.clone())
    }

    fn read_findings(&self) -> Result<Vec<Finding>> {
        Ok(self.findings.clone())
    }

    fn describe(&self) -> String {
        "mock report source".to_string()
    }
}
