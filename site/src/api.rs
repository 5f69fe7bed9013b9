//! ==============================================================================
//! api.rs - outbound request for the contact form
//! ==============================================================================
//!
//! the form posts to whatever endpoint its `action` attribute names (a hosted
//! form backend). body is the form's own field set as multipart form data.
//!
//! ==============================================================================

use gloo_net::http::Request;
use shared::form::outcome_from_status;
use shared::SubmitError;
use web_sys::{FormData, HtmlFormElement};

use crate::dom::js_message;

/// POST the form's fields to its action url, asking for a json reply
pub async fn submit_form(form: &HtmlFormElement) -> Result<(), SubmitError> {
    let body = FormData::new_with_form(form).map_err(|e| SubmitError::Transport(js_message(&e)))?;

    let response = Request::post(&form.action())
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| SubmitError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    outcome_from_status(response.status())
}
