use actix_web::{HttpRequest, HttpResponse, error, web};
use log::info;
use serde_json::Value;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{BatchEntry, ErrorResponse};
use crate::domain::payment::PaymentRecord;
use crate::domain::payout_gateway::PayoutGateway;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

const JSON_PAYLOAD_LIMIT: usize = 100 * 1024;

/// `POST /process-payment`. A body with a `payments` array is a batch of
/// independent payments; any other body is a single payment.
pub async fn process_payment<G: PayoutGateway>(
	payload: web::Json<Value>,
	process_payment_use_case: web::Data<ProcessPaymentUseCase<G>>,
) -> Result<HttpResponse, ApiError> {
	let body = payload.into_inner();

	if let Some(Value::Array(payments)) = body.get("payments") {
		info!("Received batch of {} payments", payments.len());
		let records: Vec<PaymentRecord> =
			payments.iter().map(PaymentRecord::from_value).collect();

		let entries: Vec<BatchEntry> = process_payment_use_case
			.execute_batch(&records)
			.await?
			.into_iter()
			.map(|outcome| match outcome {
				Ok(result) => BatchEntry::Paid(result),
				Err(e) => BatchEntry::Failed(ErrorResponse::new(e.to_string())),
			})
			.collect();

		return Ok(HttpResponse::Ok().json(entries));
	}

	let record = PaymentRecord::from_value(&body);
	let result = process_payment_use_case.execute(&record).await?;

	Ok(HttpResponse::Ok().json(result))
}

/// Body parsing failures answer with the same JSON error shape as every other
/// failure.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default()
		.limit(JSON_PAYLOAD_LIMIT)
		.content_type_required(false)
		.error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
			ApiError::MalformedBody {
				reason: err.to_string(),
			}
			.into()
		})
}
