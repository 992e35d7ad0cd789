use thiserror::Error;

#[derive(Error, Debug)]
pub enum HofError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot reduce an empty sequence with `{operation}`")]
    EmptyReduction { operation: String },

    #[error("Overflow in `{operation}` after {processed} elements")]
    OverflowError { operation: String, processed: usize },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Reduction or arithmetic over the input sequence.
    Computation,
    /// Dataset records that fail validation.
    Data,
    /// Writing to the output sink.
    Output,
}

impl HofError {
    pub fn empty_reduction(operation: &str) -> Self {
        Self::EmptyReduction {
            operation: operation.to_string(),
        }
    }

    pub fn invalid_value(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Output,
            Self::EmptyReduction { .. } => ErrorCategory::Computation,
            Self::OverflowError { .. } => ErrorCategory::Computation,
            Self::InvalidValueError { .. } => ErrorCategory::Data,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EmptyReduction { operation } => {
                format!("Nothing to combine: `{}` needs at least one value", operation)
            }
            Self::OverflowError { operation, .. } => {
                format!("The result of `{}` is too large to represent", operation)
            }
            Self::InvalidValueError { field, reason, .. } => {
                format!("Dataset field '{}' is invalid: {}", field, reason)
            }
            Self::IoError(_) | Self::SerializationError(_) => {
                format!("Could not write output: {}", self)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Computation => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::Output => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HofError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reduction_is_a_computation_error() {
        let err = HofError::empty_reduction("product");
        assert_eq!(err.category(), ErrorCategory::Computation);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Cannot reduce an empty sequence with `product`");
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = HofError::invalid_value("weight", 0, "must be positive");
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.user_friendly_message().contains("weight"));
        assert!(err.to_string().contains("must be positive"));
    }
}
