use flowprobe_api::error::VerifyError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("gateway error: {0}")]
    Gateway(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Verify(#[from] VerifyError),
}

impl EngineError {
    /// Add context to the error, preserving the variant.
    ///
    /// For message-carrying variants, context is prepended to the message.
    /// Wrapped source errors pass through unchanged.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            EngineError::Config(msg) => EngineError::Config(format!("{ctx}: {msg}")),
            EngineError::Transport(msg) => EngineError::Transport(format!("{ctx}: {msg}")),
            EngineError::Gateway(msg) => EngineError::Gateway(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}
