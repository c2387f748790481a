use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::routes::configure;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::paypal::credentials::CredentialResolver;
use crate::infrastructure::paypal::paypal_payout_gateway::PayPalPayoutGateway;
use crate::use_cases::build_payout_request::PayoutRequestBuilder;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod health_handler;
		pub mod payments_handler;
		pub mod routes;
		pub mod schema;
	}
}

pub mod domain {
	pub mod batch_policy;
	pub mod errors;
	pub mod payment;
	pub mod payout;
	pub mod payout_gateway;
	pub mod timestamp;
}

pub mod infrastructure {
	pub mod config {
		pub mod settings;
	}
	pub mod paypal {
		pub mod credentials;
		pub mod paypal_payout_gateway;
	}
}

pub mod use_cases {
	pub mod build_payout_request;
	pub mod process_payment;
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let http_client = Client::builder()
		.timeout(Duration::from_millis(config.provider_timeout_ms))
		.build()
		.map_err(std::io::Error::other)?;

	let gateway = PayPalPayoutGateway::new(
		http_client,
		CredentialResolver::from_config(&config),
	);
	let process_payment_use_case = ProcessPaymentUseCase::new(
		gateway,
		PayoutRequestBuilder::new(config.sender_name.clone()),
		config.batch_policy,
	);

	info!(
		"Starting payout relay on {}:{} ({:?} batches)...",
		config.host, config.port, config.batch_policy
	);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(web::Data::new(process_payment_use_case.clone()))
			.configure(configure::<PayPalPayoutGateway>)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.host.clone(), config.port))?
	.run()
	.await
}
