use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform error body returned by the HTTP layer.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
}
