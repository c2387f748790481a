use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::adapters::web::schema::ErrorResponse;
use crate::domain::errors::PaymentError;

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Cuerpo de la solicitud inválido: {reason}")]
	MalformedBody { reason: String },
	#[display("{source}")]
	Payment { source: PaymentError },
}

impl From<PaymentError> for ApiError {
	fn from(source: PaymentError) -> Self {
		ApiError::Payment { source }
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse::new(self.to_string()))
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
			ApiError::Payment { source } if source.is_client_error() => {
				StatusCode::BAD_REQUEST
			}
			ApiError::Payment { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
