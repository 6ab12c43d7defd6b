/// Network adapters for the SonarQube web API
mod sonarqube_client;

pub use sonarqube_client::{SonarQubeClient, REPORT_METRIC};
