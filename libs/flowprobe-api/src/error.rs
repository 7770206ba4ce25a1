/// Classification error — one record failed to yield a lifecycle event.
///
/// Never fatal to a session: the consumer logs and skips the record.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The record value did not parse as JSON, or parsed to a non-object.
    #[error("record value is not a JSON object: {0}")]
    NotAnObject(String),

    /// The envelope carries no nested `value` object.
    #[error("record value has no nested `value` payload")]
    MissingPayload,
}

/// Verification failure — carries the observed values for diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("expected {expected} workflow starts, observed {started}")]
    StartMismatch { expected: u32, started: u64 },

    #[error("observed {started} start events but {ended} end events")]
    StartEndMismatch { started: u64, ended: u64 },
}
