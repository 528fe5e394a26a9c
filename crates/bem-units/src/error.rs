use thiserror::Error;

/// Errors raised by quantity arithmetic.
///
/// These indicate caller misuse of the arithmetic API; they are fatal to the
/// operation and the operands are left unmodified.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    /// Operands differ in dimension.
    #[error("incompatible units: {lhs} vs {rhs}")]
    IncompatibleUnits { lhs: String, rhs: String },

    /// Elementwise operands differ in length.
    #[error("length mismatch: {lhs} vs {rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },

    /// Absolute/relative semantics requested on a non-temperature unit.
    #[error("{unit} is not a temperature unit")]
    NotTemperature { unit: String },
}

impl UnitError {
    pub fn incompatible(lhs: impl ToString, rhs: impl ToString) -> Self {
        Self::IncompatibleUnits { lhs: lhs.to_string(), rhs: rhs.to_string() }
    }

    pub fn length_mismatch(lhs: usize, rhs: usize) -> Self {
        Self::LengthMismatch { lhs, rhs }
    }
}

/// Result type alias for unit operations.
pub type Result<T> = std::result::Result<T, UnitError>;
