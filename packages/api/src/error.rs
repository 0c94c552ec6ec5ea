use thiserror::Error;

/// Errors returned by an [`ActivityBackend`](crate::ActivityBackend).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend could not be reached at all.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with a non-2xx status.
    #[error("rejected with status {status}{}", fmt_detail(.detail))]
    Rejected { status: u16, detail: Option<String> },
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Server-provided reason for a rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("Activity full".to_string()),
        };
        assert_eq!(err.to_string(), "rejected with status 400: Activity full");
        assert_eq!(err.detail(), Some("Activity full"));

        let err = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "rejected with status 500");
    }

    #[test]
    fn test_decode_has_no_detail() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.detail().is_none());
    }
}
