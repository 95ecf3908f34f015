use thiserror::Error;

/// Errors produced by the geocoding clients.
///
/// These stay internal to a resolution tier: the chain logs them and moves
/// on to the next tier rather than surfacing them to callers.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Network or TLS failure from the underlying HTTP client, or a
    /// non-2xx response status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A client-side configuration problem, e.g. an unparseable base URL.
    #[error("geocoding client error: {0}")]
    Client(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
