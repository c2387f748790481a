use actix_web::{HttpResponse, Responder, get};

use crate::adapters::web::schema::HealthResponse;

/// Liveness only; the provider is not contacted.
#[get("/health")]
pub async fn health() -> impl Responder {
	HttpResponse::Ok().json(HealthResponse {
		status: "ok".to_string(),
	})
}
