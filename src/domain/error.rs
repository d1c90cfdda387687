//! Error types shared by the repository and use-case layers.
//!
//! Repositories speak [`RepositoryError`], a closed set every transport or
//! schema failure is normalized into. Each business domain then owns one error
//! enum that both layers import; the `From<RepositoryError>` impls are the
//! mechanical re-mapping use cases perform, and anything a domain does not
//! declare collapses into its `Unknown` variant.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::types::Locale;

/// Wire-level error codes understood by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Response did not match the expected shape
    Serialization,
    /// Resource missing
    NotFound,
    /// Conflicting create or block operation
    AlreadyExists,
    /// Request rejected before reaching the network
    InvalidRequest,
    /// Anything not explicitly mapped
    Unknown,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serialization => "SERIALIZATION",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a code reported by the remote API.
    ///
    /// Codes outside the closed set, including `UNKNOWN_ERROR`, become
    /// [`ErrorCode::Unknown`]. `INVALID_REQUEST` is a local code and is never
    /// accepted from the remote side.
    #[must_use]
    pub fn from_remote(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SERIALIZATION" => Self::Serialization,
            "NOT_FOUND" => Self::NotFound,
            "ALREADY_EXISTS" => Self::AlreadyExists,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized failure of a single remote call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Response did not match the expected schema: {0}")]
    Serialization(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Remote call failed: {0}")]
    Unknown(String),
}

impl RepositoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Serialization(_) => ErrorCode::Serialization,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::AlreadyExists(_) => ErrorCode::AlreadyExists,
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    /// Build an error from a parsed remote code.
    #[must_use]
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            ErrorCode::Serialization => Self::Serialization(message),
            ErrorCode::NotFound => Self::NotFound(message),
            ErrorCode::AlreadyExists => Self::AlreadyExists(message),
            ErrorCode::InvalidRequest | ErrorCode::Unknown => Self::Unknown(message),
        }
    }
}

/// Behaviour shared by every domain error: a stable code and a message fit
/// for display to staff.
pub trait DomainError: std::error::Error + Send + Sync + 'static {
    fn code(&self) -> ErrorCode;

    fn user_message(&self, locale: Locale) -> &'static str;
}

/// System configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config payload did not match the expected schema")]
    Serialization,

    #[error("Config operation failed: {0}")]
    Unknown(String),
}

impl From<RepositoryError> for ConfigError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serialization(_) => Self::Serialization,
            RepositoryError::NotFound(msg)
            | RepositoryError::AlreadyExists(msg)
            | RepositoryError::Unknown(msg) => Self::Unknown(msg),
        }
    }
}

impl DomainError for ConfigError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Serialization => ErrorCode::Serialization,
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Serialization, Locale::English) => {
                "The configuration returned by the server is invalid."
            }
            (Self::Serialization, Locale::PortugueseBr) => {
                "A configuração retornada pelo servidor é inválida."
            }
            (Self::Unknown(_), Locale::English) => {
                "Could not load or save the configuration. Try again."
            }
            (Self::Unknown(_), Locale::PortugueseBr) => {
                "Não foi possível carregar ou salvar a configuração. Tente novamente."
            }
        }
    }
}

/// User management errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("User payload did not match the expected schema")]
    Serialization,

    #[error("User not found")]
    NotFound,

    #[error("User is already blocked")]
    AlreadyExists,

    #[error("User operation failed: {0}")]
    Unknown(String),
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serialization(_) => Self::Serialization,
            RepositoryError::NotFound(_) => Self::NotFound,
            RepositoryError::AlreadyExists(_) => Self::AlreadyExists,
            RepositoryError::Unknown(msg) => Self::Unknown(msg),
        }
    }
}

impl DomainError for UserError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::Serialization => ErrorCode::Serialization,
            Self::NotFound => ErrorCode::NotFound,
            Self::AlreadyExists => ErrorCode::AlreadyExists,
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::InvalidRequest(_), Locale::English) => {
                "Provide a user id, document or username."
            }
            (Self::InvalidRequest(_), Locale::PortugueseBr) => {
                "Informe o id do usuário, documento ou nome de usuário."
            }
            (Self::Serialization, Locale::English) => "The server returned invalid user data.",
            (Self::Serialization, Locale::PortugueseBr) => {
                "O servidor retornou dados de usuário inválidos."
            }
            (Self::NotFound, Locale::English) => "User not found.",
            (Self::NotFound, Locale::PortugueseBr) => "Usuário não encontrado.",
            (Self::AlreadyExists, Locale::English) => "This user is already blocked.",
            (Self::AlreadyExists, Locale::PortugueseBr) => "Este usuário já está bloqueado.",
            (Self::Unknown(_), Locale::English) => "Something went wrong. Try again.",
            (Self::Unknown(_), Locale::PortugueseBr) => "Algo deu errado. Tente novamente.",
        }
    }
}

/// Deposit report errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DepositError {
    #[error("Deposit payload did not match the expected schema")]
    Serialization,

    #[error("Deposit not found")]
    NotFound,

    #[error("Deposit operation failed: {0}")]
    Unknown(String),
}

impl From<RepositoryError> for DepositError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serialization(_) => Self::Serialization,
            RepositoryError::NotFound(_) => Self::NotFound,
            RepositoryError::AlreadyExists(msg) | RepositoryError::Unknown(msg) => {
                Self::Unknown(msg)
            }
        }
    }
}

impl DomainError for DepositError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Serialization => ErrorCode::Serialization,
            Self::NotFound => ErrorCode::NotFound,
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Serialization, Locale::English) => "The server returned an invalid report.",
            (Self::Serialization, Locale::PortugueseBr) => {
                "O servidor retornou um relatório inválido."
            }
            (Self::NotFound, Locale::English) => "Deposit not found.",
            (Self::NotFound, Locale::PortugueseBr) => "Depósito não encontrado.",
            (Self::Unknown(_), Locale::English) => "Could not load the deposits. Try again.",
            (Self::Unknown(_), Locale::PortugueseBr) => {
                "Não foi possível carregar os depósitos. Tente novamente."
            }
        }
    }
}

/// Dashboard summary errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Dashboard payload did not match the expected schema")]
    Serialization,

    #[error("Dashboard request failed: {0}")]
    Unknown(String),
}

impl From<RepositoryError> for DashboardError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serialization(_) => Self::Serialization,
            RepositoryError::NotFound(msg)
            | RepositoryError::AlreadyExists(msg)
            | RepositoryError::Unknown(msg) => Self::Unknown(msg),
        }
    }
}

impl DomainError for DashboardError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::Serialization => ErrorCode::Serialization,
            Self::Unknown(_) => ErrorCode::Unknown,
        }
    }

    fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Serialization, Locale::English) => "The dashboard data is invalid.",
            (Self::Serialization, Locale::PortugueseBr) => "Os dados do painel são inválidos.",
            (Self::Unknown(_), Locale::English) => "Could not load the dashboard. Try again.",
            (Self::Unknown(_), Locale::PortugueseBr) => {
                "Não foi possível carregar o painel. Tente novamente."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_repository_errors() -> Vec<RepositoryError> {
        vec![
            RepositoryError::Serialization("bad shape".to_string()),
            RepositoryError::NotFound("missing".to_string()),
            RepositoryError::AlreadyExists("dup".to_string()),
            RepositoryError::Unknown("boom".to_string()),
        ]
    }

    #[test]
    fn test_error_code_parsing_falls_back_to_unknown() {
        assert_eq!(ErrorCode::from_remote("NOT_FOUND"), ErrorCode::NotFound);
        assert_eq!(ErrorCode::from_remote("already_exists"), ErrorCode::AlreadyExists);
        assert_eq!(ErrorCode::from_remote(" SERIALIZATION "), ErrorCode::Serialization);
        assert_eq!(ErrorCode::from_remote("UNKNOWN_ERROR"), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_remote("RATE_LIMITED"), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_remote("INVALID_REQUEST"), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_remote(""), ErrorCode::Unknown);
    }

    #[test]
    fn test_error_code_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::AlreadyExists).unwrap();
        assert_eq!(json, "\"ALREADY_EXISTS\"");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn test_repository_error_code_roundtrip() {
        for err in all_repository_errors() {
            let rebuilt = RepositoryError::from_code(err.code(), "msg");
            assert_eq!(rebuilt.code(), err.code());
        }
        assert_eq!(
            RepositoryError::from_code(ErrorCode::InvalidRequest, "x").code(),
            ErrorCode::Unknown
        );
    }

    #[test]
    fn test_user_error_maps_every_repository_code() {
        let codes: Vec<ErrorCode> = all_repository_errors()
            .into_iter()
            .map(|e| UserError::from(e).code())
            .collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::Serialization,
                ErrorCode::NotFound,
                ErrorCode::AlreadyExists,
                ErrorCode::Unknown,
            ]
        );
    }

    #[test]
    fn test_config_error_collapses_undeclared_codes() {
        let codes: Vec<ErrorCode> = all_repository_errors()
            .into_iter()
            .map(|e| ConfigError::from(e).code())
            .collect();
        assert_eq!(
            codes,
            vec![
                ErrorCode::Serialization,
                ErrorCode::Unknown,
                ErrorCode::Unknown,
                ErrorCode::Unknown,
            ]
        );
    }

    #[test]
    fn test_deposit_error_collapses_already_exists() {
        let err = DepositError::from(RepositoryError::AlreadyExists("dup".to_string()));
        assert_eq!(err, DepositError::Unknown("dup".to_string()));
        assert_eq!(
            DepositError::from(RepositoryError::NotFound("tx".to_string())),
            DepositError::NotFound
        );
    }

    #[test]
    fn test_dashboard_error_mapping() {
        assert_eq!(
            DashboardError::from(RepositoryError::Serialization("x".to_string())),
            DashboardError::Serialization
        );
        assert_eq!(
            DashboardError::from(RepositoryError::NotFound("x".to_string())).code(),
            ErrorCode::Unknown
        );
    }

    #[test]
    fn test_user_messages_are_localized() {
        let err = UserError::NotFound;
        assert_eq!(err.user_message(Locale::English), "User not found.");
        assert_eq!(err.user_message(Locale::PortugueseBr), "Usuário não encontrado.");
    }
}
