#[derive(Debug, thiserror::Error)]
pub enum ScrumError {
    #[error("Too many requests, try again in a few moments: {0}")]
    RateLimited(String),

    #[error("Insufficient credits: {0}")]
    CreditsExhausted(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Invalid format in AI response: {0}")]
    ModelFormat(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScrumError::Gateway("upstream said no".to_string());
        assert_eq!(err.to_string(), "Gateway error: upstream said no");
    }

    #[test]
    fn test_rate_limit_display() {
        let err = ScrumError::RateLimited("429".to_string());
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ScrumError = serde_err.into();
        assert!(matches!(err, ScrumError::Serde(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(ScrumError::Config("invalid".to_string()));
        assert!(err_result.is_err());
    }
}
