use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooManyRecipients { max: usize, actual: usize },
    InvalidHost { input: String },
    InvalidRecipient { input: String },
    InvalidTimestamp { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::InvalidHost { input } => {
                write!(f, "invalid host (expected host[:port]): {input}")
            }
            Self::InvalidRecipient { input } => {
                write!(f, "invalid recipient (one number per recipient): {input}")
            }
            Self::InvalidTimestamp { input } => {
                write!(f, "invalid timestamp (expected YYYYMMDDHHMMSS): {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
