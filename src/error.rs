use std::string::FromUtf8Error;

use thiserror::Error;

use crate::TransportError;

pub type Result<T> = std::result::Result<T, Error>;
pub type TokenReaderResult<T> = std::result::Result<T, TokenReaderError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("token acquisition failed : {0}")]
    TokenReader(#[from] TokenReaderError),
    #[error("transport failed : {0}")]
    Transport(#[source] TransportError),
    #[error("request could not be built : {0}")]
    Http(#[from] http::Error),
    #[error("default transport could not be initialized : {0}")]
    Reqwest(#[from] reqwest::Error),
}

#[derive(Error, Debug, Clone)]
pub enum TokenReaderError {
    #[error("response has malformed format: not found {0} in {1}")]
    MissingField(&'static str, String),
    #[error("response body is not a query string : {0}")]
    NotUtf8(#[from] FromUtf8Error),
}

impl TokenReaderError {
    /// Name of the missing field, if this error reports one.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            TokenReaderError::MissingField(field, _) => Some(field),
            TokenReaderError::NotUtf8(_) => None,
        }
    }
}
