use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use paypal_payout_relay::domain::errors::PaymentError;
use paypal_payout_relay::domain::payment::PaymentMode;
use paypal_payout_relay::domain::payout::{
	AccessToken, BatchHeader, PayoutBatchRequest, PayoutBatchResponse,
};
use paypal_payout_relay::domain::payout_gateway::PayoutGateway;

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
	Token(PaymentMode),
	Payout {
		mode:    PaymentMode,
		request: PayoutBatchRequest,
	},
}

#[derive(Default)]
struct FakeState {
	calls:            Vec<GatewayCall>,
	token_failure:    Option<PaymentError>,
	payout_failures:  Vec<(usize, PaymentError)>,
	payouts_accepted: usize,
}

/// In-memory gateway that records every call and accepts payouts unless told
/// otherwise.
#[derive(Clone, Default)]
pub struct FakePayoutGateway {
	state: Arc<Mutex<FakeState>>,
}

impl FakePayoutGateway {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fail_tokens_with(&self, error: PaymentError) {
		self.state.lock().unwrap().token_failure = Some(error);
	}

	/// Rejects the `n`th payout submission (1-based).
	pub fn fail_payout_number(&self, n: usize, error: PaymentError) {
		self.state.lock().unwrap().payout_failures.push((n, error));
	}

	pub fn calls(&self) -> Vec<GatewayCall> {
		self.state.lock().unwrap().calls.clone()
	}

	pub fn payout_requests(&self) -> Vec<(PaymentMode, PayoutBatchRequest)> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				GatewayCall::Payout { mode, request } => Some((mode, request)),
				GatewayCall::Token(_) => None,
			})
			.collect()
	}

	pub fn token_modes(&self) -> Vec<PaymentMode> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				GatewayCall::Token(mode) => Some(mode),
				GatewayCall::Payout { .. } => None,
			})
			.collect()
	}
}

#[async_trait]
impl PayoutGateway for FakePayoutGateway {
	async fn acquire_token(
		&self,
		mode: PaymentMode,
	) -> Result<AccessToken, PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.calls.push(GatewayCall::Token(mode));
		match &state.token_failure {
			Some(error) => Err(error.clone()),
			None => Ok(AccessToken::new(format!("token-{mode}"))),
		}
	}

	async fn submit_payout(
		&self,
		request: &PayoutBatchRequest,
		_token: &AccessToken,
		mode: PaymentMode,
	) -> Result<PayoutBatchResponse, PaymentError> {
		let mut state = self.state.lock().unwrap();
		state.calls.push(GatewayCall::Payout {
			mode,
			request: request.clone(),
		});

		let submission = state
			.calls
			.iter()
			.filter(|call| matches!(call, GatewayCall::Payout { .. }))
			.count();
		if let Some((_, error)) =
			state.payout_failures.iter().find(|(n, _)| *n == submission)
		{
			return Err(error.clone());
		}

		state.payouts_accepted += 1;
		Ok(PayoutBatchResponse {
			batch_header: BatchHeader {
				payout_batch_id: format!("PAYOUT-{}", state.payouts_accepted),
				batch_status:    "PENDING".to_string(),
				extra:           Default::default(),
			},
			extra:        Default::default(),
		})
	}
}
