//! dependency-explorer - dependency tree explorer for analysed projects
//!
//! This library turns the dependency reports and findings produced by a
//! dependency analysis into annotated, filterable trees, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`explorer`): Tree model, classification, aggregation
//! - **Application Layer** (`application`): Use cases, read models and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dependency_explorer::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let report_source = FileSystemReader::new(PathBuf::from("reports"));
//! let issue_transitioner = InMemoryTransitioner::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     ExploreDependenciesUseCase::new(report_source, issue_transitioner, progress_reporter);
//!
//! // Execute
//! let request = ExploreRequest::new(DisplayMode::Mismatch, String::new());
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = TextFormatter::new(false).format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod explorer;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::memory::InMemoryTransitioner;
    pub use crate::adapters::outbound::network::SonarQubeClient;
    pub use crate::application::dto::{ExploreRequest, ExploreResponse, OutputFormat};
    pub use crate::application::read_models::ExplorerReadModel;
    pub use crate::application::use_cases::{ExploreDependenciesUseCase, ExplorerSession};
    pub use crate::explorer::domain::{
        BadgeCategory, DependencyReport, DisplayTree, ExplorationState, Finding,
        NormalizedFinding, Proposition, RawArtifact, TransitionRequest, TransitionStatus,
    };
    pub use crate::explorer::policies::{DisplayMode, NodeFilter};
    pub use crate::explorer::services::{
        Aggregator, BadgeMatcher, FindingClassifier, PropositionMerger, TransitionStub,
        TreeEnricher,
    };
    pub use crate::ports::outbound::{
        ExplorerFormatter, IssueTransitioner, OutputPresenter, ProgressReporter, ReportSource,
    };
    pub use crate::shared::Result;
}
