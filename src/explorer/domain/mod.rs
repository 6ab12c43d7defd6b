pub mod badge;
pub mod display_tree;
pub mod exploration_state;
pub mod finding;
pub(crate) mod lenient;
pub mod proposition;
pub mod raw_artifact;
pub mod report_metadata;

pub use badge::{BadgeCategory, Badges};
pub use display_tree::{AggregateFlags, ArtifactKind, DisplayNode, DisplayTree, NodeId};
pub use exploration_state::ExplorationState;
pub use finding::{
    Finding, NormalizedFinding, TransitionRequest, TransitionStatus, Transitionable, OPEN_STATUS,
};
pub use proposition::{Proposition, PropositionMetadata};
pub use raw_artifact::{DependencyReport, LicenseField, RawArtifact};
pub use report_metadata::ReportMetadata;
