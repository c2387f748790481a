use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PAYOUT_CURRENCY: &str = "USD";
pub const RECIPIENT_TYPE_EMAIL: &str = "EMAIL";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PayoutBatchRequest {
	pub sender_batch_header: SenderBatchHeader,
	pub items:               Vec<PayoutItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SenderBatchHeader {
	pub sender_batch_id: String,
	pub email_subject:   String,
	pub email_message:   String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PayoutItem {
	pub recipient_type: String,
	pub amount:         PayoutAmount,
	pub receiver:       String,
	pub note:           String,
	pub sender_item_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PayoutAmount {
	pub value:    String,
	pub currency: String,
}

/// Provider answer to a payout submission. Only the batch header is read;
/// every other field is kept as returned.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PayoutBatchResponse {
	pub batch_header: BatchHeader,
	#[serde(flatten)]
	pub extra:        Map<String, Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BatchHeader {
	pub payout_batch_id: String,
	pub batch_status:    String,
	#[serde(flatten)]
	pub extra:           Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
	pub access_token: String,
}

/// Bearer token for a single payout submission.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for AccessToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("AccessToken(***)")
	}
}
