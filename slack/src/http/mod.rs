//! Shapes for Slack Web API methods, one module per method family.

use serde::de::DeserializeOwned;

pub mod bots;

pub enum Error {
    /// Slack answered with `"ok": false` and this error code
    Slack(String),
    /// The body did not match the expected shape; holds the raw body
    CannotParse(::serde_json::error::Error, String),
}

impl Error {
    fn pretty_body(json: &str) -> String {
        ::serde_json::from_str::<::serde_json::Value>(json)
            .and_then(|v| ::serde_json::to_string_pretty(&v))
            .unwrap_or_else(|_| json.to_string())
    }
}

impl ::std::fmt::Debug for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match self {
            Error::Slack(reason) => write!(f, "Slack({:?})", reason),
            Error::CannotParse(e, json) => {
                write!(f, "CannotParse({:?})\n{}", e, Error::pretty_body(json))
            }
        }
    }
}

impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match self {
            Error::Slack(reason) => write!(f, "{}", reason),
            Error::CannotParse(e, json) => write!(f, "{}\n{}", e, Error::pretty_body(json)),
        }
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match self {
            Error::Slack(_) => None,
            Error::CannotParse(cause, _) => Some(cause),
        }
    }
}

/// Decode a response body into `T`.
///
/// Whether `T` tolerates an `"ok": false` body is up to `T`; this only
/// reports bodies that don't fit at all.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    match ::serde_json::from_str::<T>(body) {
        Ok(r) => {
            debug!(
                "decoded {} byte body as {}",
                body.len(),
                ::std::any::type_name::<T>()
            );
            Ok(r)
        }
        Err(e) => {
            warn!("cannot parse body as {}: {}", ::std::any::type_name::<T>(), e);
            Err(Error::CannotParse(e, body.to_string()))
        }
    }
}
