use uuid::Uuid;

use crate::domain::errors::PaymentError;
use crate::domain::payment::{PaymentRecord, coerce_to_number, coerce_to_string};
use crate::domain::payout::{
	PAYOUT_CURRENCY, PayoutAmount, PayoutBatchRequest, PayoutItem,
	RECIPIENT_TYPE_EMAIL, SenderBatchHeader,
};
use crate::domain::timestamp::now_unix_millis;

/// Turns one payment record into a single-item PayPal payout batch.
#[derive(Debug, Clone)]
pub struct PayoutRequestBuilder {
	sender_name: String,
}

impl PayoutRequestBuilder {
	pub fn new(sender_name: impl Into<String>) -> Self {
		Self {
			sender_name: sender_name.into(),
		}
	}

	pub fn build(
		&self,
		record: &PaymentRecord,
	) -> Result<PayoutBatchRequest, PaymentError> {
		let employee_name = trimmed(record.employee_name.as_ref());
		let paypal_email = trimmed(record.paypal_email.as_ref());
		let period_start = trimmed(record.period_start.as_ref());
		let period_end = trimmed(record.period_end.as_ref());
		let amount = record.amount.as_ref().map_or(0.0, coerce_to_number);

		for (name, value) in [
			("employee_name", &employee_name),
			("paypal_email", &paypal_email),
			("period_start", &period_start),
			("period_end", &period_end),
		] {
			if value.is_empty() {
				return Err(PaymentError::Validation {
					reason: format!("{name} is empty"),
				});
			}
		}

		if !amount.is_finite() || amount <= 0.0 {
			return Err(PaymentError::Validation {
				reason: format!("amount {amount} is not a positive number"),
			});
		}

		let sender_item_id = match record.employee_id.as_ref() {
			Some(id) if !coerce_to_string(id).is_empty() => coerce_to_string(id),
			_ => format!("ID-{}", now_unix_millis()),
		};

		Ok(PayoutBatchRequest {
			sender_batch_header: SenderBatchHeader {
				sender_batch_id: new_sender_batch_id(),
				email_subject:   format!(
					"Pago de {} a {employee_name}",
					self.sender_name
				),
				email_message:   format!(
					"Has recibido un pago de {}.",
					self.sender_name
				),
			},
			items:               vec![PayoutItem {
				recipient_type: RECIPIENT_TYPE_EMAIL.to_string(),
				amount: PayoutAmount {
					value:    format_amount(amount),
					currency: PAYOUT_CURRENCY.to_string(),
				},
				receiver: paypal_email,
				note: format!(
					"Pago correspondiente al período {period_start} - {period_end}"
				),
				sender_item_id,
			}],
		})
	}
}

/// PayPal rejects a reused sender_batch_id, so the millisecond clock alone is
/// not enough.
pub fn new_sender_batch_id() -> String {
	format!("BATCH-{}-{}", now_unix_millis(), Uuid::new_v4().simple())
}

/// Two-decimal rendering of a positive amount. Exact binary ties (x.125,
/// x.375, x.625, x.875) go to the larger cent, not to the even one.
fn format_amount(amount: f64) -> String {
	let is_exact_tie =
		(amount * 8.0).fract() == 0.0 && (amount * 4.0).fract() != 0.0;
	if !is_exact_tie {
		return format!("{amount:.2}");
	}

	let cents = (amount * 100.0).ceil() as u64;
	format!("{}.{:02}", cents / 100, cents % 100)
}

fn trimmed(value: Option<&serde_json::Value>) -> String {
	value.map(coerce_to_string).unwrap_or_default().trim().to_string()
}
