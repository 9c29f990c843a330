use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntervalError {
    #[error("Unable to parse interval from string {input:?}: expected {expected} at byte {position}")]
    SyntaxError {
        input: String,
        position: usize,
        expected: &'static str,
    },

    #[error("Interval field '{field}' is out of range: {value}")]
    FieldOverflowError { field: &'static str, value: String },

    #[error("Timestamp out of range: {message}")]
    TimestampOutOfRange { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IntervalError {
    /// True for failures produced while reading the canonical text form.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IntervalError::SyntaxError { .. } | IntervalError::FieldOverflowError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IntervalError::SyntaxError { .. } => {
                "Use the form '[N year] [N mons] [N days] [-]HH:MM:SS[.frac]' with single spaces"
            }
            IntervalError::FieldOverflowError { .. } => {
                "Years, months and days must fit a signed 32-bit integer"
            }
            IntervalError::TimestampOutOfRange { .. } => {
                "Use a smaller interval or a timestamp closer to the present"
            }
            IntervalError::IoError(_) => "Check that the file exists and is readable",
            IntervalError::TomlError(_) => "Check the configuration file syntax",
            IntervalError::InvalidConfigValueError { .. } => {
                "Fix the configuration value named in the message"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_classification() {
        let syntax = IntervalError::SyntaxError {
            input: "00:00".to_string(),
            position: 0,
            expected: "end of input",
        };
        let overflow = IntervalError::FieldOverflowError {
            field: "days",
            value: "99999999999".to_string(),
        };
        let config = IntervalError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };

        assert!(syntax.is_parse_error());
        assert!(overflow.is_parse_error());
        assert!(!config.is_parse_error());
        assert!(syntax.to_string().contains("\"00:00\""));
        assert!(overflow.to_string().contains("days"));
    }
}
