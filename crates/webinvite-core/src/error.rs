use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_message() {
        let err = CoreError::InvariantViolation("cannot update an unsaved record");
        assert_eq!(
            err.to_string(),
            "Invariant violation: cannot update an unsaved record"
        );
    }
}
