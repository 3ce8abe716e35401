pub mod proximity;

pub use proximity::{ProximityAlert, ProximityAlertEvaluator};
