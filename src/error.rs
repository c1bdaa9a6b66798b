use thiserror::Error;

pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors raised while turning a raw API record into a typed one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonitorError {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` has malformed value {value:?}")]
    Format { field: &'static str, value: String },

    #[error("{}", describe_lookup(.table, .code))]
    KeyLookup {
        table: &'static str,
        code: Option<i64>,
    },
}

impl MonitorError {
    pub fn format(field: &'static str, value: impl Into<String>) -> Self {
        MonitorError::Format {
            field,
            value: value.into(),
        }
    }
}

fn describe_lookup(table: &str, code: &Option<i64>) -> String {
    match code {
        Some(code) => format!("unknown {} code {}", table, code),
        None => format!("no {} set", table),
    }
}
