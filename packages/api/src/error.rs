use thiserror::Error;

use crate::endpoints::Operation;

/// Message shown for any network or decoding failure.
pub const CONNECTION_ERROR: &str = "Erro de conexão";
/// Message used when a failed response carries no readable error.
pub const UNEXPECTED_ERROR: &str = "Erro inesperado";
/// Message shown when a required form field is blank.
pub const MISSING_FIELDS: &str = "Preencha todos os campos!";

/// Failure of a typed gateway operation.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required field was blank; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with `ok: false` or an error status.
    #[error("{0}")]
    Rejected(String),

    /// No usable response: network failure or an undecodable body.
    #[error("{}", CONNECTION_ERROR)]
    Connection,

    /// The configured backend has no endpoint for this operation.
    #[error("Operação não suportada: {0}")]
    Unsupported(Operation),
}

impl ApiError {
    pub fn missing_fields() -> Self {
        ApiError::Validation(MISSING_FIELDS.to_string())
    }
}
