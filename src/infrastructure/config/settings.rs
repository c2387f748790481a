use serde::Deserialize;

use crate::domain::batch_policy::BatchPolicy;

pub const ENV_PREFIX: &str = "APP";
pub const SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
pub const LIVE_BASE_URL: &str = "https://api-m.paypal.com";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub host:                         String,
	pub port:                         u16,
	pub paypal_sandbox_client_id:     String,
	pub paypal_sandbox_client_secret: String,
	pub paypal_live_client_id:        String,
	pub paypal_live_client_secret:    String,
	pub paypal_sandbox_base_url:      String,
	pub paypal_live_base_url:         String,
	pub provider_timeout_ms:          u64,
	pub server_keepalive:             u64,
	pub sender_name:                  String,
	pub batch_policy:                 BatchPolicy,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_with_prefix(ENV_PREFIX)
	}

	pub fn load_with_prefix(prefix: &str) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("host", "0.0.0.0")?
			.set_default("port", 5000)?
			.set_default("paypal_sandbox_client_id", "")?
			.set_default("paypal_sandbox_client_secret", "")?
			.set_default("paypal_live_client_id", "")?
			.set_default("paypal_live_client_secret", "")?
			.set_default("paypal_sandbox_base_url", SANDBOX_BASE_URL)?
			.set_default("paypal_live_base_url", LIVE_BASE_URL)?
			.set_default("provider_timeout_ms", 10_000)?
			.set_default("server_keepalive", 75)?
			.set_default("sender_name", "E.V.A")?
			.set_default("batch_policy", "fail_fast")?
			.add_source(config::Environment::with_prefix(prefix))
			.build()?;

		config_builder.try_deserialize()
	}
}
