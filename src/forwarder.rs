use axum::http::Method;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ForwardError;
use crate::form::FormFields;
use crate::prediction::{PredictionRequest, PredictionService};
use crate::templates::{RenderedPage, TemplateRenderer, HOME_TEMPLATE};

/// What the forwarder needs to know about an inbound request.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Decoded form body; empty for anything but POST.
    pub form: FormFields,
}

/// Relays form submissions to the prediction service and renders the home
/// page.
#[derive(Clone)]
pub struct Forwarder {
    prediction: Arc<dyn PredictionService>,
    templates: Arc<dyn TemplateRenderer>,
}

impl Forwarder {
    pub fn new(
        prediction: Arc<dyn PredictionService>,
        templates: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Forwarder {
            prediction,
            templates,
        }
    }

    /// Handle one request.
    ///
    /// A POST is forwarded before the page is rendered; the remote status is
    /// not inspected. Missing fields and transport failures are returned as
    /// errors without any recovery.
    pub async fn handle(&self, request: &InboundRequest) -> Result<RenderedPage, ForwardError> {
        if request.method == Method::POST {
            debug!("Form submission with {} field(s): {:?}", request.form.len(), request.form);

            let payload = PredictionRequest::from_form(&request.form)?;
            debug!("Prediction payload: {:?}", payload);

            let body = payload.encode_body()?;
            let status = self
                .prediction
                .submit(body)
                .await
                .map_err(ForwardError::Prediction)?;
            info!(
                "Forwarded stats to {} (status {})",
                self.prediction.endpoint(),
                status
            );
        }

        self.templates.render(HOME_TEMPLATE)
    }
}
