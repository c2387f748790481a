use serde::{Deserialize, Serialize};

use crate::domain::payment::PayoutResult;
use crate::domain::timestamp::now_iso8601;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ErrorResponse {
	pub success:   bool,
	pub error:     String,
	pub timestamp: String,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>) -> Self {
		Self {
			success:   false,
			error:     error.into(),
			timestamp: now_iso8601(),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HealthResponse {
	pub status: String,
}

/// One element of a batch response. Failed entries only appear when partial
/// reporting is enabled.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum BatchEntry {
	Paid(PayoutResult),
	Failed(ErrorResponse),
}
