use std::error;
use std::fmt;

/// Failure to turn a raw service payload into a price.
#[derive(Debug)]
pub enum DecodeError {
    JsonParse(serde_json::Error),
    MissingField(String),
    EntryNotFound(String),
    ParsePrice(std::num::ParseFloatError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::JsonParse(ref err) => write!(f, "JSON Parse Error: {}", err),
            DecodeError::MissingField(ref field) => write!(f, "Missing Field: {}", field),
            DecodeError::EntryNotFound(ref what) => write!(f, "Entry Not Found: {}", what),
            DecodeError::ParsePrice(ref err) => write!(f, "Price Parse Error: {}", err),
        }
    }
}

impl error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            DecodeError::JsonParse(ref err) => Some(err),
            DecodeError::MissingField(_) => None,
            DecodeError::EntryNotFound(_) => None,
            DecodeError::ParsePrice(ref err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> DecodeError {
        DecodeError::JsonParse(err)
    }
}

impl From<std::num::ParseFloatError> for DecodeError {
    fn from(err: std::num::ParseFloatError) -> DecodeError {
        DecodeError::ParsePrice(err)
    }
}

/// Everything that can go wrong while fetching one quote. None of these
/// ever reach a caller: the fetch pipeline absorbs them into a diagnostics
/// event and the zero sentinel.
#[derive(Debug)]
pub enum QuoteError {
    RequestConstruction(String),
    HttpRequest(reqwest::Error),
    Decode(DecodeError),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuoteError::RequestConstruction(ref err) => {
                write!(f, "Request Construction Error: {}", err)
            }
            QuoteError::HttpRequest(ref err) => write!(f, "HTTP Request Error: {}", err),
            QuoteError::Decode(ref err) => write!(f, "Decode Error: {}", err),
        }
    }
}

impl error::Error for QuoteError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            QuoteError::RequestConstruction(_) => None,
            QuoteError::HttpRequest(ref err) => Some(err),
            QuoteError::Decode(ref err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> QuoteError {
        QuoteError::HttpRequest(err)
    }
}

impl From<DecodeError> for QuoteError {
    fn from(err: DecodeError) -> QuoteError {
        QuoteError::Decode(err)
    }
}
