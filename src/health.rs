use serde::Serialize;

use crate::planner::constants::READY_MESSAGE;

/// Static liveness acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub message: &'static str,
}

pub fn health_check() -> HealthStatus {
    HealthStatus {
        message: READY_MESSAGE,
    }
}
