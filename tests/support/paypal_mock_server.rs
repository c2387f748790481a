use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

pub const MOCK_ACCESS_TOKEN: &str = "A21AAMockAccessToken";

#[derive(Debug, Clone)]
pub struct RecordedTokenRequest {
	pub authorization: Option<String>,
	pub content_type:  Option<String>,
	pub form:          HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct RecordedPayoutRequest {
	pub authorization: Option<String>,
	pub body:          Value,
}

#[derive(Default)]
pub struct PayPalMockState {
	pub token_requests:  Mutex<Vec<RecordedTokenRequest>>,
	pub payout_requests: Mutex<Vec<RecordedPayoutRequest>>,
	reject_token:        AtomicBool,
	payout_failure:      Mutex<Option<(u16, String)>>,
	payouts_issued:      AtomicUsize,
	payout_delay:        Mutex<Option<Duration>>,
}

impl PayPalMockState {
	pub fn reject_token_requests(&self) {
		self.reject_token.store(true, Ordering::SeqCst);
	}

	/// Every payout submission from now on answers with `status` and `body`.
	pub fn fail_payouts_with(&self, status: u16, body: &str) {
		*self.payout_failure.lock().unwrap() = Some((status, body.to_string()));
	}

	/// Holds every payout response back for `delay` before answering.
	pub fn delay_payouts_by(&self, delay: Duration) {
		*self.payout_delay.lock().unwrap() = Some(delay);
	}

	pub fn token_requests(&self) -> Vec<RecordedTokenRequest> {
		self.token_requests.lock().unwrap().clone()
	}

	pub fn payout_requests(&self) -> Vec<RecordedPayoutRequest> {
		self.payout_requests.lock().unwrap().clone()
	}
}

/// A stand-in for the PayPal REST API serving the token and payouts
/// endpoints on an ephemeral local port.
pub struct PayPalMockServer {
	pub url:   String,
	pub state: web::Data<PayPalMockState>,
	handle:    ServerHandle,
}

impl PayPalMockServer {
	pub async fn stop(self) {
		self.handle.stop(false).await;
	}
}

pub async fn setup_paypal_mock() -> PayPalMockServer {
	let state = web::Data::new(PayPalMockState::default());
	let app_state = state.clone();

	let server = HttpServer::new(move || {
		App::new()
			.app_data(app_state.clone())
			.route("/v1/oauth2/token", web::post().to(token))
			.route("/v1/payments/payouts", web::post().to(payouts))
	})
	.workers(1)
	.bind(("127.0.0.1", 0))
	.unwrap();

	let address = server.addrs()[0];
	let server = server.run();
	let handle = server.handle();
	actix_web::rt::spawn(server);

	PayPalMockServer {
		url: format!("http://{address}"),
		state,
		handle,
	}
}

fn header(req: &HttpRequest, name: actix_web::http::header::HeaderName) -> Option<String> {
	req.headers()
		.get(name)
		.and_then(|value| value.to_str().ok())
		.map(str::to_string)
}

async fn token(
	req: HttpRequest,
	form: web::Form<HashMap<String, String>>,
	state: web::Data<PayPalMockState>,
) -> HttpResponse {
	state.token_requests.lock().unwrap().push(RecordedTokenRequest {
		authorization: header(&req, AUTHORIZATION),
		content_type:  header(&req, CONTENT_TYPE),
		form:          form.into_inner(),
	});

	if state.reject_token.load(Ordering::SeqCst) {
		return HttpResponse::Unauthorized().json(json!({
			"error": "invalid_client",
			"error_description": "Client Authentication failed"
		}));
	}

	HttpResponse::Ok().json(json!({
		"scope": "https://uri.paypal.com/services/payments/payouts",
		"access_token": MOCK_ACCESS_TOKEN,
		"token_type": "Bearer",
		"app_id": "APP-80W284485P519543T",
		"expires_in": 32400
	}))
}

async fn payouts(
	req: HttpRequest,
	body: web::Json<Value>,
	state: web::Data<PayPalMockState>,
) -> HttpResponse {
	let body = body.into_inner();
	state.payout_requests.lock().unwrap().push(RecordedPayoutRequest {
		authorization: header(&req, AUTHORIZATION),
		body:          body.clone(),
	});

	let delay = *state.payout_delay.lock().unwrap();
	if let Some(delay) = delay {
		actix_web::rt::time::sleep(delay).await;
	}

	if let Some((status, failure)) = state.payout_failure.lock().unwrap().clone() {
		return HttpResponse::build(StatusCode::from_u16(status).unwrap())
			.content_type("application/json")
			.body(failure);
	}

	let issued = state.payouts_issued.fetch_add(1, Ordering::SeqCst) + 1;
	HttpResponse::Created().json(json!({
		"batch_header": {
			"sender_batch_header": body["sender_batch_header"].clone(),
			"payout_batch_id": format!("PAYOUT-{issued}"),
			"batch_status": "PENDING"
		},
		"links": [{
			"href": format!("https://api-m.sandbox.paypal.com/v1/payments/payouts/PAYOUT-{issued}"),
			"rel": "self",
			"method": "GET"
		}]
	}))
}
