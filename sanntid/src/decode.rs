//! Lenient JSON decoding.
//!
//! Upstream bodies that do not have the expected shape decode to an empty
//! list. The decode error is kept next to the empty list so that "no data"
//! and "bad response" can still be told apart.

use serde::de::DeserializeOwned;
use tracing::debug;

/// Records decoded from an upstream body.
#[derive(Debug)]
pub struct Decoded<T> {
    /// Decoded records. Empty when `error` is set.
    pub items: Vec<T>,
    /// Why the body could not be decoded, if it could not.
    pub error: Option<serde_json::Error>,
}

impl<T> Decoded<T> {
    /// Whether the body failed to decode and `items` is empty as a result.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Decode `body` as `D` and pull the records out with `extract`.
///
/// Never fails: a decode error produces an empty [`Decoded`].
pub fn decode_json<D, T>(body: &[u8], extract: impl FnOnce(D) -> Vec<T>) -> Decoded<T>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(envelope) => Decoded {
            items: extract(envelope),
            error: None,
        },
        Err(e) => {
            debug!(error = %e, "response body did not decode, treating as empty");
            Decoded {
                items: Vec::new(),
                error: Some(e),
            }
        }
    }
}
