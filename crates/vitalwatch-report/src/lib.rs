//! vitalwatch-report
//!
//! Turns a rule-engine assessment into everything the user sees: the
//! summary line, recommendations, badge and gauge, the compressed payload,
//! the report-card view model, and the rendered PDF report card.

pub mod assemble;
pub mod badge;
pub mod card;
pub mod error;
pub mod payload;
pub mod pdf;
pub mod recommendations;
pub mod render;
pub mod styles;
pub mod summary;
