use std::error::Error as StdError;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error at step {step}: {source}")]
    Model {
        /// The step being computed when the model failed.
        step: usize,

        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(step: usize, err: E) -> Self {
        Self::Model {
            step,
            source: Box::new(err),
        }
    }
}
