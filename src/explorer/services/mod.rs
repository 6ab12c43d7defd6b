mod aggregator;
mod badge_matcher;
mod finding_classifier;
mod proposition_merger;
mod transition_stub;
mod tree_enricher;

pub use aggregator::{AggregatedTree, Aggregator, EXPAND_LEVELS};
pub use badge_matcher::BadgeMatcher;
pub use finding_classifier::FindingClassifier;
pub use proposition_merger::PropositionMerger;
pub use transition_stub::TransitionStub;
pub use tree_enricher::TreeEnricher;
