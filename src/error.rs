//! Input validation errors

use thiserror::Error;

/// Markup that cannot be scanned. Fatal to the single audit; no analyzer runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("markup is empty")]
    Empty,

    #[error("markup is not valid UTF-8 text (invalid byte at offset {valid_up_to})")]
    NotUtf8 { valid_up_to: usize },
}

impl From<std::str::Utf8Error> for InputError {
    fn from(err: std::str::Utf8Error) -> Self {
        InputError::NotUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}
