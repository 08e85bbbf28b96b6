pub mod form;

pub use form::{FormDecoder, StandardFormDecoder};

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::error::ForwardError;
use crate::form::FormFields;
use crate::forwarder::{Forwarder, InboundRequest};
use crate::templates::RenderedPage;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
    pub form_decoder: Arc<dyn FormDecoder>,
}

/// Build the Axum router for the statistics form.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(home_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Any method on `/`. Only POST bodies are decoded and forwarded.
async fn home_handler(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<RenderedPage, ForwardError> {
    let method = request.method().clone();
    let form = if method == Method::POST {
        let fields = state.form_decoder.decode(request).await?;
        if fields.is_empty() {
            debug!("POST / carried no form fields");
        }
        fields
    } else {
        FormFields::default()
    };

    state
        .forwarder
        .handle(&InboundRequest { method, form })
        .await
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}

const SERVER_ERROR_HTML: &str = "<h1>Server Error (500)</h1>";

/// Faults are logged and answered with a generic page; details stay in the log.
impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_HTML)).into_response()
    }
}
