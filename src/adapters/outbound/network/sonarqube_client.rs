use crate::adapters::outbound::payload;
use crate::explorer::domain::{DependencyReport, Finding, TransitionRequest};
use crate::ports::outbound::{IssueTransitioner, ReportSource};
use crate::shared::error::ExplorerError;
use crate::shared::Result;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// Measure holding the serialized dependency reports of a project
pub const REPORT_METRIC: &str = "ExplorerReport";

const MEASURES_ENDPOINT: &str = "/api/measures/component";
const ISSUES_ENDPOINT: &str = "/api/issues/search";
const TRANSITION_ENDPOINT: &str = "/api/issues/do_transition";

#[derive(Debug, Deserialize)]
struct MeasuresResponse {
    component: MeasuredComponent,
}

#[derive(Debug, Deserialize)]
struct MeasuredComponent {
    #[serde(default)]
    measures: Vec<Measure>,
}

#[derive(Debug, Deserialize)]
struct Measure {
    metric: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransitionResponse {
    #[serde(default)]
    issue: Option<Finding>,
}

/// SonarQubeClient adapter for the SonarQube web API
///
/// Implements both the ReportSource and IssueTransitioner ports with a
/// blocking reqwest client. The bearer token is optional; public projects
/// can be read anonymously.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests
#[derive(Clone)]
pub struct SonarQubeClient {
    client: Client,
    base_url: Url,
    project_key: String,
    branch: Option<String>,
    pull_request: Option<String>,
    token: Option<String>,
}

impl SonarQubeClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `project_key` on the server at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not an absolute http(s) URL, the
    /// project key is empty or the HTTP client cannot be built
    pub fn new(base_url: &str, project_key: &str) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;

        if project_key.trim().is_empty() {
            return Err(ExplorerError::Validation {
                message: "A project key is required to read from the server (--project-key)"
                    .to_string(),
            }
            .into());
        }

        let user_agent = format!("dependency-explorer/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            project_key: project_key.trim().to_string(),
            branch: None,
            pull_request: None,
            token: None,
        })
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch.filter(|b| !b.is_empty());
        self
    }

    pub fn with_pull_request(mut self, pull_request: Option<String>) -> Self {
        self.pull_request = pull_request.filter(|p| !p.is_empty());
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    fn parse_base_url(base_url: &str) -> Result<Url> {
        let invalid = |reason: String| ExplorerError::Validation {
            message: format!("Invalid server URL '{}': {}", base_url, reason),
        };

        let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid("only http and https are supported".to_string()).into());
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query strings and fragments are not allowed".to_string()).into());
        }
        Ok(url)
    }

    /// Joins `endpoint` to the base URL, keeping any context path of the server
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, endpoint)).map_err(|e| {
            ExplorerError::HostApiError {
                endpoint: endpoint.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Branch or pull request selector; a pull request wins over a branch
    fn branch_params(&self) -> Vec<(&'static str, String)> {
        if let Some(pull_request) = &self.pull_request {
            vec![("pullRequest", pull_request.clone())]
        } else if let Some(branch) = &self.branch {
            vec![("branch", branch.clone())]
        } else {
            Vec::new()
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<String> {
        let response: Response =
            self.authorize(request)
                .send()
                .map_err(|e| ExplorerError::HostApiError {
                    endpoint: endpoint.to_string(),
                    details: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerError::HostApiError {
                endpoint: endpoint.to_string(),
                details: format!("server returned status code {}", status),
            }
            .into());
        }

        response.text().map_err(|e| {
            ExplorerError::HostApiError {
                endpoint: endpoint.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn invalid_body(endpoint: &str, error: serde_json::Error) -> anyhow::Error {
        ExplorerError::HostApiError {
            endpoint: endpoint.to_string(),
            details: format!("unexpected response body: {}", error),
        }
        .into()
    }
}

impl ReportSource for SonarQubeClient {
    fn read_reports(&self) -> Result<Vec<DependencyReport>> {
        let mut params = vec![
            ("component", self.project_key.clone()),
            ("metricKeys", REPORT_METRIC.to_string()),
        ];
        params.extend(self.branch_params());

        let url = self.endpoint_url(MEASURES_ENDPOINT)?;
        let body = self.send(MEASURES_ENDPOINT, self.client.get(url).query(&params))?;

        let response: MeasuresResponse = serde_json::from_str(&body)
            .map_err(|e| Self::invalid_body(MEASURES_ENDPOINT, e))?;

        let value = response
            .component
            .measures
            .into_iter()
            .find(|measure| measure.metric == REPORT_METRIC)
            .and_then(|measure| measure.value)
            .filter(|value| !value.is_empty());

        match value {
            Some(value) => payload::parse_measures(&value)
                .map_err(|e| Self::invalid_body(MEASURES_ENDPOINT, e)),
            None => Ok(Vec::new()),
        }
    }

    fn read_findings(&self) -> Result<Vec<Finding>> {
        let mut params = vec![
            ("components", self.project_key.clone()),
            ("s", "FILE_LINE".to_string()),
            ("issueStatuses", "CONFIRMED,OPEN".to_string()),
            ("additionalFields", "_all".to_string()),
            ("languages", "dependencyexplorer".to_string()),
        ];
        params.extend(self.branch_params());

        let url = self.endpoint_url(ISSUES_ENDPOINT)?;
        let body = self.send(ISSUES_ENDPOINT, self.client.get(url).query(&params))?;

        payload::parse_issues(&body).map_err(|e| Self::invalid_body(ISSUES_ENDPOINT, e))
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.project_key, self.base_url)
    }
}

impl IssueTransitioner for SonarQubeClient {
    fn transition(
        &self,
        request: &TransitionRequest,
        _findings: &[Finding],
    ) -> Result<Option<Finding>> {
        let form = [
            ("issue", request.key.as_str()),
            ("transition", request.status.as_str()),
        ];

        let url = self.endpoint_url(TRANSITION_ENDPOINT)?;
        let body = self.send(TRANSITION_ENDPOINT, self.client.post(url).form(&form))?;

        let response: TransitionResponse = serde_json::from_str(&body)
            .map_err(|e| Self::invalid_body(TRANSITION_ENDPOINT, e))?;
        Ok(response.issue)
    }
}
