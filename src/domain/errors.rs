use derive_more::derive::{Display, Error};

/// Everything that can go wrong while turning one payment record into a
/// payout.
///
/// The `Display` output is the message handed back to the HTTP client.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum PaymentError {
	#[display("Campo faltante: {field}")]
	MissingField { field: &'static str },
	#[display("Datos de pago inválidos o incompletos")]
	Validation { reason: String },
	#[display("No se pudo autenticar con PayPal")]
	Authentication { detail: String },
	#[display("{body}")]
	Payout { body: String },
	#[display("{message}")]
	Network { message: String },
}

impl PaymentError {
	/// Only the required-field presence check is blamed on the caller; a
	/// record that fails while building the payout is a processing failure.
	pub fn is_client_error(&self) -> bool {
		matches!(self, PaymentError::MissingField { .. })
	}
}
