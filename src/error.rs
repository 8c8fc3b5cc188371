/// Errors reported by the perceptron's call surface.
///
/// Both kinds are detected synchronously at the point of the call and
/// returned to the caller immediately; the model has no transient failure
/// modes and never retries or recovers internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PerceptronError {
    /// Non-positive `input_size` or `output_size` at construction, or a
    /// malformed dataset handed to the trainer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A `predict` or `train` argument whose length disagrees with the
    /// dimensions the model was constructed with.
    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}
