#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token not found in the registry!")]
    UnknownToken,

    #[error("Serde Error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}
