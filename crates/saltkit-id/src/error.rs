use thiserror::Error;

pub type IdResult<T> = Result<T, IdError>;

#[derive(Debug, Error)]
pub enum IdError {
    #[error("invalid generator configuration: {0}")]
    Config(String),

    /// Elapsed time since the configured epoch no longer fits the ID's time
    /// bit field. The generator is permanently exhausted; only a new epoch
    /// helps.
    #[error("elapsed time since the configured epoch exceeds the id time field")]
    ClockOverflow,

    /// The per-tick sequence counter could not be reset in time. The
    /// allocator normally absorbs this by waiting for the next tick; the
    /// variant surfaces only when it reports the condition instead.
    #[error("per-tick sequence counter exhausted")]
    SequenceExhausted,

    #[error("id allocation failed: {0}")]
    Generate(String),

    #[error("failed to decode alphanumeric id {input:?}: {reason}")]
    Decode { input: String, reason: String },
}
