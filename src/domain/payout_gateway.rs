use async_trait::async_trait;

use crate::domain::errors::PaymentError;
use crate::domain::payment::PaymentMode;
use crate::domain::payout::{AccessToken, PayoutBatchRequest, PayoutBatchResponse};

/// Outbound side of a payout: authenticate, then submit one batch.
#[async_trait]
pub trait PayoutGateway: Send + Sync + 'static {
	async fn acquire_token(
		&self,
		mode: PaymentMode,
	) -> Result<AccessToken, PaymentError>;

	async fn submit_payout(
		&self,
		request: &PayoutBatchRequest,
		token: &AccessToken,
		mode: PaymentMode,
	) -> Result<PayoutBatchResponse, PaymentError>;
}
