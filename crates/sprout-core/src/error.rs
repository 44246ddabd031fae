pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("mind map JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] sprout_graph::Error),

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}
