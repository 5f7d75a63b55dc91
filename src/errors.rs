use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Which prompt an input belongs to. Drives the wording of rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Year,
    Month,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Year => write!(f, "year"),
            InputField::Month => write!(f, "month"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    // ---- Input rejections ---------------------------------------------------
    /// The line could not be read as a whole number.
    #[error("Invalid input. Please enter a whole number for the {field}.")]
    NotWholeNumber { field: InputField },

    #[error("Year cannot be negative.")]
    NegativeYear(i64),

    #[error("Month must be between 1 and 12.")]
    MonthOutOfRange(i64),

    /// Standard input reached end of file before a valid value was read.
    #[error("Input closed before a valid {field} was entered.")]
    InputClosed { field: InputField },

    // ---- Config -------------------------------------------------------------
    /// Any issue reading the config file (unreadable, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid string value for a typed item.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic domain error when you want to bubble a message without a new variant.
    #[error("{0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// True for the errors a prompt loop recovers from by asking again.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Error::NotWholeNumber { .. } | Error::NegativeYear(_) | Error::MonthOutOfRange(_)
        )
    }
}
