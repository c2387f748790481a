use actix_web::web;

use crate::adapters::web::health_handler::health;
use crate::adapters::web::payments_handler::{json_config, process_payment};
use crate::domain::payout_gateway::PayoutGateway;

/// Registers the relay's routes. The `ProcessPaymentUseCase<G>` must already
/// be registered as app data.
pub fn configure<G: PayoutGateway>(cfg: &mut web::ServiceConfig) {
	cfg.app_data(json_config()).service(health).service(
		web::resource("/process-payment").route(web::post().to(process_payment::<G>)),
	);
}
