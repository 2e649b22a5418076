// =============================================================================
// Fetch error taxonomy
// =============================================================================
//
// Every way a series fetch can go wrong — transport failure, an API-level
// error or quota note, an unrecognised payload shape, an empty series —
// collapses into this one type.  Callers never branch on the variant: a
// failed ticker is simply skipped (scan) or reported as a generic error
// state (single load).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but refused the request (rate-limit note, invalid
    /// symbol, bad key).
    #[error("api error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    /// The payload parsed but contained no usable bars.
    #[error("empty series for {0}")]
    Empty(String),
}
