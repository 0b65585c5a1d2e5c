/// Errors produced while encoding or decoding a [`CallRequest`](crate::CallRequest).
#[derive(Debug, thiserror::Error)]
pub enum CallRequestError {
    /// Both the legacy `input` and the canonical `data` payload are set, and they differ.
    #[error("both 'input' and 'data' provided but not same")]
    EncodeConflict,
    /// The input is not a JSON object of the expected shape.
    #[error("malformed call request: {0}")]
    MalformedWire(#[from] serde_json::Error),
    /// The JSON serializer failed while writing an otherwise valid request.
    #[error("failed to encode call request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CallRequestError {
    /// Returns `true` if this is an [`EncodeConflict`](Self::EncodeConflict).
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::EncodeConflict)
    }

    /// Returns `true` if this is a [`MalformedWire`](Self::MalformedWire).
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedWire(_))
    }
}
