use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::domain::errors::PaymentError;
use crate::domain::payment::PaymentMode;
use crate::domain::payout::{
	AccessToken, PayoutBatchRequest, PayoutBatchResponse, TokenResponse,
};
use crate::domain::payout_gateway::PayoutGateway;
use crate::infrastructure::paypal::credentials::CredentialResolver;

pub const TOKEN_PATH: &str = "/v1/oauth2/token";
pub const PAYOUTS_PATH: &str = "/v1/payments/payouts";

#[derive(Clone)]
pub struct PayPalPayoutGateway {
	http_client: Client,
	credentials: CredentialResolver,
}

impl PayPalPayoutGateway {
	pub fn new(http_client: Client, credentials: CredentialResolver) -> Self {
		Self {
			http_client,
			credentials,
		}
	}
}

#[async_trait]
impl PayoutGateway for PayPalPayoutGateway {
	async fn acquire_token(
		&self,
		mode: PaymentMode,
	) -> Result<AccessToken, PaymentError> {
		let credentials = self.credentials.resolve(mode);

		let resp = self
			.http_client
			.post(credentials.endpoint(TOKEN_PATH))
			.basic_auth(&credentials.client_id, Some(&credentials.client_secret))
			.form(&[("grant_type", "client_credentials")])
			.send()
			.await
			.map_err(|e| {
				error!("Error obtaining {mode} access token: {e}");
				PaymentError::Authentication {
					detail: e.to_string(),
				}
			})?;

		if !resp.status().is_success() {
			let status = resp.status();
			let body = resp.text().await.unwrap_or_default();
			error!("Error obtaining {mode} access token ({status}): {body}");
			return Err(PaymentError::Authentication { detail: body });
		}

		let token: TokenResponse = resp.json().await.map_err(|e| {
			error!("Unreadable {mode} token response: {e}");
			PaymentError::Authentication {
				detail: e.to_string(),
			}
		})?;

		debug!("Obtained {mode} access token");
		Ok(AccessToken::new(token.access_token))
	}

	async fn submit_payout(
		&self,
		request: &PayoutBatchRequest,
		token: &AccessToken,
		mode: PaymentMode,
	) -> Result<PayoutBatchResponse, PaymentError> {
		let credentials = self.credentials.resolve(mode);

		let resp = self
			.http_client
			.post(credentials.endpoint(PAYOUTS_PATH))
			.bearer_auth(token.as_str())
			.json(request)
			.send()
			.await
			.map_err(|e| {
				error!(
					"Failed to send payout {} to PayPal: {e}",
					request.sender_batch_header.sender_batch_id
				);
				PaymentError::Network {
					message: e.to_string(),
				}
			})?;

		if !resp.status().is_success() {
			let body = rejection_body(resp).await;
			error!(
				"PayPal rejected payout {}: {body}",
				request.sender_batch_header.sender_batch_id
			);
			return Err(PaymentError::Payout { body });
		}

		resp.json::<PayoutBatchResponse>().await.map_err(|e| {
			error!("Unexpected payout response from PayPal: {e}");
			PaymentError::Payout {
				body: format!("Unexpected payout response: {e}"),
			}
		})
	}
}

/// Structured provider errors are passed on as compact JSON; anything else
/// collapses to the status line.
async fn rejection_body(resp: Response) -> String {
	let status = resp.status().as_u16();
	let text = resp.text().await.unwrap_or_default();

	match serde_json::from_str::<Value>(&text) {
		Ok(body @ (Value::Object(_) | Value::Array(_))) => body.to_string(),
		_ => format!("Request failed with status code {status}"),
	}
}
