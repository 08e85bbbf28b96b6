use thiserror::Error;

/// Faults raised while handling a form submission.
///
/// None of these are recovered by the forwarder; the web host turns every
/// variant into a generic `500` page.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// A required form key was absent on a POST submission.
    #[error("form field `{0}` is missing")]
    FieldMissing(&'static str),

    #[error("malformed form body: {0}")]
    MalformedForm(String),

    #[error("failed to encode prediction payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The outbound call never produced a response (refused, DNS, timeout).
    #[error("prediction service request failed: {0:#}")]
    Prediction(anyhow::Error),

    #[error("template `{0}` not found")]
    TemplateNotFound(String),
}
