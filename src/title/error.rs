use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TitleError {
    #[error("Unknown property '{name}' in '{title}'")]
    UnknownProperty { name: String, title: String },

    #[error("Incorrect number of arguments ({actual} != {expected})")]
    IncorrectLength { expected: usize, actual: usize },
    #[error("Number of arguments not a multiple of {modulo} ({actual})")]
    NotMultiple { modulo: usize, actual: usize },
    #[error("Not enough arguments ({actual} < {min})")]
    NotEnoughArguments { min: usize, actual: usize },
    #[error("Too many arguments ({actual} > {max})")]
    TooManyArguments { max: usize, actual: usize },

    #[error("Not a number: '{arg}'")]
    NotANumber { arg: String },
    #[error("Not in range [{min}..{max}]: '{arg}'")]
    OutOfRange { arg: String, min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownProperty,
    Cardinality,
    InvalidNumber,
}

impl TitleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownProperty { .. } => ErrorKind::UnknownProperty,
            Self::IncorrectLength { .. }
            | Self::NotMultiple { .. }
            | Self::NotEnoughArguments { .. }
            | Self::TooManyArguments { .. } => ErrorKind::Cardinality,
            Self::NotANumber { .. } | Self::OutOfRange { .. } => ErrorKind::InvalidNumber,
        }
    }
}

pub type Result<T> = std::result::Result<T, TitleError>;
