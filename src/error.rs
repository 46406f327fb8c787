use thiserror::Error;

/// Failures raised by the decision engine itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecisionError {
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DecisionError {
    pub fn invalid_matrix(msg: impl Into<String>) -> Self {
        Self::InvalidMatrix(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}

/// Failures while turning free-form text into payoff rows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Empty input. Please enter numbers.")]
    Empty,

    #[error("Invalid input '{token}'. Please enter numbers only (e.g., 100 50).")]
    NotANumber { token: String },

    #[error("Invalid input '{token}'. Payoffs must be finite numbers.")]
    NonFinite { token: String },

    #[error("All alternatives must have {expected} states, got {found}.")]
    RaggedRow { expected: usize, found: usize },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<InputError>,
    },
}

impl InputError {
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DecisionError>;
