//! Analyzer module - category analyzers and the audit engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{AggregateStats, AuditEngine};
pub use scoring::ScoreCard;
