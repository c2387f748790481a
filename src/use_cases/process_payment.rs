use log::{error, info, warn};

use crate::domain::batch_policy::BatchPolicy;
use crate::domain::errors::PaymentError;
use crate::domain::payment::{PaymentRecord, PayoutResult};
use crate::domain::payout_gateway::PayoutGateway;
use crate::use_cases::build_payout_request::PayoutRequestBuilder;

pub type PaymentOutcome = Result<PayoutResult, PaymentError>;

#[derive(Clone)]
pub struct ProcessPaymentUseCase<G: PayoutGateway> {
	gateway:         G,
	request_builder: PayoutRequestBuilder,
	batch_policy:    BatchPolicy,
}

impl<G: PayoutGateway> ProcessPaymentUseCase<G> {
	pub fn new(
		gateway: G,
		request_builder: PayoutRequestBuilder,
		batch_policy: BatchPolicy,
	) -> Self {
		Self {
			gateway,
			request_builder,
			batch_policy,
		}
	}

	pub fn batch_policy(&self) -> BatchPolicy {
		self.batch_policy
	}

	/// Pays out a single record: presence check, payload, token, submission.
	/// Every call authenticates again and submits a new batch, so the same
	/// record sent twice is paid twice.
	pub async fn execute(&self, record: &PaymentRecord) -> PaymentOutcome {
		if let Some(field) = record.first_missing_field() {
			warn!("Rejecting payment with missing field '{field}'");
			return Err(PaymentError::MissingField { field });
		}

		let mode = record.mode();
		let request = self.request_builder.build(record)?;
		let token = self.gateway.acquire_token(mode).await?;
		let response = self.gateway.submit_payout(&request, &token, mode).await?;

		info!(
			"Payout {} submitted in {mode} mode: {} ({})",
			request.sender_batch_header.sender_batch_id,
			response.batch_header.payout_batch_id,
			response.batch_header.batch_status
		);

		Ok(PayoutResult::paid(record, &response.batch_header))
	}

	/// Pays out records one at a time, in order.
	///
	/// Under [`BatchPolicy::FailFast`] the first failure is returned and later
	/// records are never attempted. Earlier payouts are not reversed. Under
	/// [`BatchPolicy::ReportPartial`] every record is attempted and each gets
	/// its own outcome.
	pub async fn execute_batch(
		&self,
		records: &[PaymentRecord],
	) -> Result<Vec<PaymentOutcome>, PaymentError> {
		let mut outcomes = Vec::with_capacity(records.len());

		for (index, record) in records.iter().enumerate() {
			let outcome = self.execute(record).await;

			if let Err(e) = &outcome {
				error!("Payment {} of {} failed: {e}", index + 1, records.len());
				if self.batch_policy == BatchPolicy::FailFast {
					if index > 0 {
						warn!(
							"Aborting batch after {index} submitted payouts; they are \
							 not reversed"
						);
					}
					return Err(e.clone());
				}
			}

			outcomes.push(outcome);
		}

		Ok(outcomes)
	}
}
