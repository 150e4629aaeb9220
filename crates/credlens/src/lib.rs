//! Hybrid loan approval engine.
//!
//! A deterministic rule score built from five threshold-table components is blended 60/40
//! with an opinion from an external language model. The model call sits behind
//! [`opinion::OpinionSource`] and degrades to a neutral opinion on any failure.

pub mod config;
pub mod error;
pub mod opinion;
pub mod scoring;
pub mod session;
pub mod telemetry;
