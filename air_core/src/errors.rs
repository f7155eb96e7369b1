//! # Error Types
//!
//! Structured error types for air_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Note that the psychrometric engine itself (see [`crate::psychrometrics`])
//! never produces errors: an unsupported parameter pair or a physically
//! invalid input leaves the state record partially populated. Errors are
//! raised at the calculation-item layer, where validation lives.
//!
//! ## Example
//!
//! ```rust
//! use air_core::errors::{CalcError, CalcResult};
//!
//! fn validate_airflow(airflow_m3_per_s: f64) -> CalcResult<()> {
//!     if airflow_m3_per_s <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "airflow_m3_per_s".to_string(),
//!             value: airflow_m3_per_s.to_string(),
//!             reason: "Airflow must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::psychrometrics::AirParameter;

/// Result type alias for air_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The two given parameters have no derivation path
    #[error("Unsupported parameter pair: {first:?} + {second:?}")]
    UnsupportedParameterPair {
        first: AirParameter,
        second: AirParameter,
    },

    /// The engine could not resolve a complete state from the inputs
    #[error("State not resolved: {reason}")]
    UnresolvedState { reason: String },

    /// A referenced calculation item does not exist in the project
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnsupportedParameterPair error
    pub fn unsupported_pair(first: AirParameter, second: AirParameter) -> Self {
        CalcError::UnsupportedParameterPair { first, second }
    }

    /// Create an UnresolvedState error
    pub fn unresolved(reason: impl Into<String>) -> Self {
        CalcError::UnresolvedState {
            reason: reason.into(),
        }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: impl Into<String>) -> Self {
        CalcError::ItemNotFound { id: id.into() }
    }

    /// Check if this is a recoverable error (the caller can supply
    /// different inputs and retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::UnsupportedParameterPair { .. } | CalcError::UnresolvedState { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnsupportedParameterPair { .. } => "UNSUPPORTED_PARAMETER_PAIR",
            CalcError::UnresolvedState { .. } => "UNRESOLVED_STATE",
            CalcError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("airflow_m3_per_s", "-0.5", "Airflow must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::unsupported_pair(AirParameter::Enthalpy, AirParameter::DewPoint)
                .error_code(),
            "UNSUPPORTED_PARAMETER_PAIR"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::unresolved("saturated beyond capacity").is_recoverable());
        assert!(!CalcError::missing_field("label").is_recoverable());
    }
}
