//! Mapping of transport errors onto [`SpiceError`].

use spiceroute_core::SpiceError;

/// Classifies a `reqwest` error. Everything here is a network-class failure.
pub fn from_reqwest(context: &str, err: reqwest::Error) -> SpiceError {
    if err.is_decode() {
        return SpiceError::decode(format!("{}: {}", context, err));
    }
    if let Some(status) = err.status() {
        return SpiceError::status(status.as_u16(), format!("{}: {}", context, err));
    }
    if err.is_timeout() {
        return SpiceError::network(format!("{}: request timed out", context));
    }
    SpiceError::network(format!("{}: {}", context, err))
}
