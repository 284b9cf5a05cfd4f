//! goldmatch: Golden-rule matching and live alert engine for football betting odds
//!
//! This library provides the core components for:
//! - Normalizing raw bookmaker quotes into a canonical odds record
//! - Matching canonical odds against an authored golden-rule table
//! - Parsing the shorthand prediction grammar shared by all evaluators
//! - Settling predictions against final scores
//! - Live per-tick alerts on how close a prediction is to resolving
//!
//! Every engine operation is a pure, synchronous function; fetching,
//! persistence, and delivery belong to the calling layer.

pub mod alert;
pub mod cli;
pub mod config;
pub mod engine;
pub mod fixture;
pub mod odds;
pub mod prediction;
pub mod rules;
pub mod telemetry;
