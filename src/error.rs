//! Error type.

use thiserror::Error;

/// Errors raised by the solver guard and instance I/O.
///
/// The search itself cannot fail; empty input yields an empty route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("{count} customers exceed the configured limit of {limit}")]
    TooManyCustomers { count: usize, limit: usize },

    #[error("Failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid instance JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_customers_message() {
        let err = RouteError::TooManyCustomers {
            count: 12,
            limit: 9,
        };
        assert_eq!(
            err.to_string(),
            "12 customers exceed the configured limit of 9"
        );
    }
}
