use derive_more::{Display, Error, From};

/// Errors raised at the edges of the calculator: user input, configuration
/// and output. The date rules themselves never fail.
#[derive(Debug, Display, From, Error)]
pub enum PayrollError {
    #[display(fmt = "invalid reference month '{}': expected YYYY-MM or YYYY-MM-DD", _0)]
    #[from(ignore)]
    InvalidMonth(#[error(not(source))] String),

    #[display(fmt = "invalid date format string '{}'", _0)]
    #[from(ignore)]
    InvalidFormat(#[error(not(source))] String),

    #[display(fmt = "invalid value for {}: {}", name, reason)]
    #[from(ignore)]
    InvalidConfig { name: &'static str, reason: String },

    #[display(fmt = "io error: {}", _0)]
    Io(#[error(source)] std::io::Error),

    #[display(fmt = "csv error: {}", _0)]
    Csv(#[error(source)] csv::Error),

    #[display(fmt = "json error: {}", _0)]
    Json(#[error(source)] serde_json::Error),
}

pub type Result<T, E = PayrollError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wrapped_errors_convert_and_expose_source() {
        let err: PayrollError = std::io::Error::other("disk full").into();
        assert!(matches!(err, PayrollError::Io(_)));
        assert_eq!(err.to_string(), "io error: disk full");
        assert!(err.source().is_some());
    }

    #[test]
    fn input_errors_have_no_source() {
        let err = PayrollError::InvalidMonth("soon".to_string());
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "invalid reference month 'soon': expected YYYY-MM or YYYY-MM-DD"
        );

        let err = PayrollError::InvalidConfig {
            name: "PAYROLL_FORMAT",
            reason: "no match".to_string(),
        };
        assert!(err.source().is_none());
    }
}
