//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod explorer_read_model;
pub mod explorer_read_model_builder;

pub use explorer_read_model::{
    ExplorerReadModel, IssueView, ModuleView, NodeView, ReportMetadataView, RuleView,
};
pub use explorer_read_model_builder::{ExplorerReadModelBuilder, ALL_RULES_LABEL};
