//! Deterministic efficiency and value scoring for scraped vehicle
//! specifications.
//!
//! A raw attribute bag is coerced into a [`SpecificationRecord`] by
//! [`normalize`], then [`score::score_record`] turns it into a
//! [`ScoreResult`]. Both steps are total: sparse or noisy input degrades to
//! defaults rather than errors.

pub mod cli;
pub mod config;
pub mod error;
pub mod normalize;
pub mod report;
pub mod score;
pub mod telemetry;
pub mod types;

pub use error::{CarscoreError, Result};
pub use score::score_record;
pub use types::config::ScoringConfig;
pub use types::record::SpecificationRecord;
pub use types::scoring::ScoreResult;
