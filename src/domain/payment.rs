use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payout::BatchHeader;
use crate::domain::timestamp::now_iso8601;

pub const LIVE_MODE: &str = "live";

/// Fields every payment record must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 7] = [
	"employee_id",
	"employee_name",
	"amount",
	"paypal_email",
	"payment_mode",
	"period_start",
	"period_end",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMode {
	Sandbox,
	Live,
}

impl PaymentMode {
	/// Only the exact literal `live` selects live mode. Anything else,
	/// including `Live` or `LIVE`, falls back to sandbox.
	pub fn from_raw(raw: &str) -> Self {
		if raw == LIVE_MODE {
			PaymentMode::Live
		} else {
			PaymentMode::Sandbox
		}
	}
}

impl fmt::Display for PaymentMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PaymentMode::Sandbox => write!(f, "sandbox"),
			PaymentMode::Live => write!(f, "live"),
		}
	}
}

/// A payment as received from the client.
///
/// Fields are kept as loose JSON values: callers send numbers for ids and
/// strings for amounts, and coercion happens when the payout is built.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentRecord {
	#[serde(default)]
	pub employee_id:   Option<Value>,
	#[serde(default)]
	pub employee_name: Option<Value>,
	#[serde(default)]
	pub amount:        Option<Value>,
	#[serde(default)]
	pub paypal_email:  Option<Value>,
	#[serde(default)]
	pub payment_mode:  Option<Value>,
	#[serde(default)]
	pub period_start:  Option<Value>,
	#[serde(default)]
	pub period_end:    Option<Value>,
}

impl PaymentRecord {
	/// Reads a record out of an arbitrary JSON value. Anything that is not an
	/// object yields an empty record, which then fails the presence check.
	pub fn from_value(value: &Value) -> Self {
		serde_json::from_value(value.clone()).unwrap_or_default()
	}

	pub fn field(&self, name: &str) -> Option<&Value> {
		match name {
			"employee_id" => self.employee_id.as_ref(),
			"employee_name" => self.employee_name.as_ref(),
			"amount" => self.amount.as_ref(),
			"paypal_email" => self.paypal_email.as_ref(),
			"payment_mode" => self.payment_mode.as_ref(),
			"period_start" => self.period_start.as_ref(),
			"period_end" => self.period_end.as_ref(),
			_ => None,
		}
	}

	pub fn first_missing_field(&self) -> Option<&'static str> {
		REQUIRED_FIELDS
			.into_iter()
			.find(|name| !self.field(name).is_some_and(is_truthy))
	}

	pub fn mode(&self) -> PaymentMode {
		match &self.payment_mode {
			Some(Value::String(raw)) => PaymentMode::from_raw(raw),
			_ => PaymentMode::Sandbox,
		}
	}
}

/// Outcome of one successful payout, echoed back to the client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PayoutResult {
	pub success:        bool,
	pub transaction_id: String,
	pub status:         String,
	pub amount:         Value,
	pub paypal_email:   Value,
	pub employee_name:  Value,
	pub timestamp:      String,
}

impl PayoutResult {
	pub fn paid(record: &PaymentRecord, header: &BatchHeader) -> Self {
		Self {
			success:        true,
			transaction_id: header.payout_batch_id.clone(),
			status:         header.batch_status.clone(),
			amount:         record.amount.clone().unwrap_or(Value::Null),
			paypal_email:   record.paypal_email.clone().unwrap_or(Value::Null),
			employee_name:  record.employee_name.clone().unwrap_or(Value::Null),
			timestamp:      now_iso8601(),
		}
	}
}

/// JavaScript-style truthiness, used for the required field check.
pub fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

pub fn coerce_to_string(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => number.to_string(),
		other => other.to_string(),
	}
}

/// Numeric reading of a loose JSON value. Unparseable input becomes NaN.
pub fn coerce_to_number(value: &Value) -> f64 {
	match value {
		Value::Null => 0.0,
		Value::Bool(flag) => f64::from(u8::from(*flag)),
		Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
		Value::String(text) => {
			let text = text.trim();
			if text.is_empty() {
				0.0
			} else {
				text.parse().unwrap_or(f64::NAN)
			}
		}
		Value::Array(_) | Value::Object(_) => f64::NAN,
	}
}
