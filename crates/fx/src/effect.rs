//! Effect abstraction.

/// A mono effect that can be applied to a buffer.
pub trait Effect: Send + Sync {
    /// Get effect name (as it appears in chain descriptions and logs).
    fn name(&self) -> &str;

    /// Apply the effect, returning a buffer of the same length.
    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<f32>, FxError>;
}

/// Errors from building or applying effects.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// A parameter value the effect cannot work with
    #[error("invalid {effect} parameter: {message}")]
    InvalidParameter {
        /// Effect name
        effect: &'static str,
        /// What is wrong with the value
        message: String,
    },

    /// Reverb was given an empty impulse response
    #[error("impulse response is empty")]
    EmptyImpulseResponse,

    /// Failed to load an impulse response file
    #[error("failed to load impulse response: {0}")]
    ImpulseResponse(#[from] stompbox_core::CoreError),
}

impl FxError {
    pub(crate) fn invalid(effect: &'static str, message: impl Into<String>) -> Self {
        FxError::InvalidParameter {
            effect,
            message: message.into(),
        }
    }
}
