use std::cell::Cell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{SubmitError, TransportError};
use crate::logger::Logger;

/// Message shown for any failure the user cannot act on field-by-field.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

/// How long a success flash stays on screen before auto-dismissal.
pub const FLASH_AUTO_DISMISS_MS: u32 = 5_000;

/// Serialized form ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRequest {
    pub action: String,
    pub method: String,
    pub fields: Vec<(String, String)>,
    pub reset_on_success: bool,
}

/// JSON contract the server answers with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl TransportReply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Network seam. One call in flight per form instance; the controller
/// enforces that, not the transport.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &FormRequest) -> Result<TransportReply, TransportError>;
}

/// DOM seam for everything the submit lifecycle touches on the page.
pub trait FormView {
    /// Disable the submit control and swap in the busy indicator.
    fn set_busy(&mut self);
    /// Re-enable the submit control and restore its original label.
    fn restore_idle(&mut self);
    /// Clear the form-scoped error slot from a previous attempt.
    fn clear_feedback(&mut self);
    fn mark_field_invalid(&mut self, field: &str, message: &str);
    fn show_form_error(&mut self, message: &str);
    fn show_flash(&mut self, message: &str);
    fn navigate(&mut self, url: &str);
    fn reset_fields(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent.
    AlreadySubmitting,
    Success {
        redirected: bool,
    },
    /// Server said success=false; inline feedback was applied.
    Invalid {
        field_errors: usize,
    },
    /// Transport failure, non-2xx status, or malformed body. The user saw
    /// the generic retry message.
    Failed(SubmitError),
}

/// Drives one form's submit lifecycle:
/// Idle -> Submitting -> {success | validation | network | malformed} -> Idle.
///
/// State lives in a `Cell` so hosts can share the controller behind an
/// `Rc` and re-entrant submit attempts are rejected instead of tripping a
/// borrow. Every exit path restores the submit control and returns the
/// state to Idle; nothing propagates past this type.
#[derive(Debug, Default)]
pub struct AjaxFormController {
    state: Cell<SubmitState>,
}

impl AjaxFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    pub async fn submit<T, V>(
        &self,
        transport: &T,
        view: &mut V,
        request: &FormRequest,
        logger: &dyn Logger,
    ) -> SubmitOutcome
    where
        T: Transport + ?Sized,
        V: FormView + ?Sized,
    {
        if self.state.get() == SubmitState::Submitting {
            logger.debug("submission already in flight; ignoring");
            return SubmitOutcome::AlreadySubmitting;
        }
        self.state.set(SubmitState::Submitting);
        // Resets the state even if the caller drops this future mid-flight.
        let _guard = IdleGuard { state: &self.state };

        view.set_busy();
        view.clear_feedback();
        logger.info(&format!("submitting form to {}", request.action));

        let outcome = match classify(transport, request).await {
            Ok(response) => apply_response(view, request, response, logger),
            Err(err) => {
                logger.error(&format!("form submission failed: {err}"));
                view.show_form_error(GENERIC_ERROR_MESSAGE);
                SubmitOutcome::Failed(err)
            }
        };

        view.restore_idle();
        outcome
    }
}

struct IdleGuard<'a> {
    state: &'a Cell<SubmitState>,
}

impl Drop for IdleGuard<'_> {
    fn drop(&mut self) {
        self.state.set(SubmitState::Idle);
    }
}

async fn classify<T: Transport + ?Sized>(
    transport: &T,
    request: &FormRequest,
) -> Result<FormResponse, SubmitError> {
    let reply = transport.send(request).await?;
    if !reply.is_success() {
        return Err(SubmitError::Status(reply.status));
    }
    if !reply.is_json() {
        return Err(SubmitError::MalformedResponse(reply.content_type));
    }
    serde_json::from_str(&reply.body)
        .map_err(|_| SubmitError::MalformedResponse(reply.content_type))
}

fn apply_response<V: FormView + ?Sized>(
    view: &mut V,
    request: &FormRequest,
    response: FormResponse,
    logger: &dyn Logger,
) -> SubmitOutcome {
    if response.success {
        if let Some(message) = &response.message {
            view.show_flash(message);
        }
        if let Some(url) = &response.redirect {
            logger.info(&format!("redirecting to {url}"));
            view.navigate(url);
            return SubmitOutcome::Success { redirected: true };
        }
        if request.reset_on_success {
            view.reset_fields();
        }
        SubmitOutcome::Success { redirected: false }
    } else {
        let mut field_errors = 0;
        if let Some(errors) = &response.errors {
            for (field, message) in errors {
                view.mark_field_invalid(field, message);
                field_errors += 1;
            }
        }
        if let Some(message) = &response.message {
            view.show_form_error(message);
        }
        logger.warn("server rejected submission");
        SubmitOutcome::Invalid { field_errors }
    }
}
