use log::warn;

use crate::domain::payment::PaymentMode;
use crate::infrastructure::config::settings::Config;

#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
	pub client_id:     String,
	pub client_secret: String,
	pub base_url:      String,
}

impl ProviderCredentials {
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.base_url.trim_end_matches('/'), path)
	}
}

impl std::fmt::Debug for ProviderCredentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ProviderCredentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"***")
			.field("base_url", &self.base_url)
			.finish()
	}
}

/// Per-mode PayPal credentials, fixed at startup.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
	sandbox: ProviderCredentials,
	live:    ProviderCredentials,
}

impl CredentialResolver {
	pub fn new(sandbox: ProviderCredentials, live: ProviderCredentials) -> Self {
		Self { sandbox, live }
	}

	pub fn from_config(config: &Config) -> Self {
		let resolver = Self::new(
			ProviderCredentials {
				client_id:     config.paypal_sandbox_client_id.clone(),
				client_secret: config.paypal_sandbox_client_secret.clone(),
				base_url:      config.paypal_sandbox_base_url.clone(),
			},
			ProviderCredentials {
				client_id:     config.paypal_live_client_id.clone(),
				client_secret: config.paypal_live_client_secret.clone(),
				base_url:      config.paypal_live_base_url.clone(),
			},
		);

		for mode in [PaymentMode::Sandbox, PaymentMode::Live] {
			let credentials = resolver.resolve(mode);
			if credentials.client_id.is_empty() || credentials.client_secret.is_empty()
			{
				warn!("PayPal {mode} credentials are not configured");
			}
		}

		resolver
	}

	pub fn resolve(&self, mode: PaymentMode) -> &ProviderCredentials {
		match mode {
			PaymentMode::Live => &self.live,
			PaymentMode::Sandbox => &self.sandbox,
		}
	}
}
