//! Live alert module
//!
//! Per-tick estimation of how close a standing prediction is to
//! resolving, with a hot/warm/cold urgency tier.

mod calculator;
mod types;

pub use calculator::live_alert;
pub use types::{AlertKind, AlertLevel, AlertState};
