//! AJAX form wiring: gloo-net transport plus the DOM-backed view.

/// Join a form action and an encoded query string. An action that already
/// carries a query keeps it and the new pairs are appended.
pub fn request_url(action: &str, query: &str) -> String {
    if query.is_empty() {
        action.to_string()
    } else if action.contains('?') {
        format!("{action}&{query}")
    } else {
        format!("{action}?{query}")
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;

    use std::rc::Rc;

    use async_trait::async_trait;
    use gemdash_core::{
        AjaxFormController, FormRequest, FormView, Logger, Transport, TransportError,
        TransportReply,
    };
    use gloo_net::http::{Method, RequestBuilder};
    use js_sys::Array;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

    use crate::console::ConsoleLogger;
    use crate::dom;
    use crate::page;

    /// Real network backend. One instance serves every form; serialization is
    /// per-form, enforced by each form's controller.
    pub struct GlooTransport;

    fn encode(text: &str) -> String {
        js_sys::encode_uri_component(text)
            .as_string()
            .unwrap_or_default()
    }

    fn urlencode_fields(fields: &[(String, String)]) -> String {
        fields
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    #[async_trait(?Send)]
    impl Transport for GlooTransport {
        async fn send(&self, request: &FormRequest) -> Result<TransportReply, TransportError> {
            let encoded = urlencode_fields(&request.fields);
            let built = if request.method.eq_ignore_ascii_case("get") {
                RequestBuilder::new(&request_url(&request.action, &encoded))
                    .method(Method::GET)
                    .header("X-Requested-With", "XMLHttpRequest")
                    .build()
            } else {
                RequestBuilder::new(&request.action)
                    .method(Method::POST)
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .header("X-Requested-With", "XMLHttpRequest")
                    .body(encoded)
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let response = built
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let content_type = response.headers().get("content-type");
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(TransportReply {
                status: response.status(),
                content_type,
                body,
            })
        }
    }

    /// DOM effects for one submission. Created per attempt; the original
    /// button label is captured at busy time and restored verbatim.
    pub struct DomFormView {
        form: HtmlFormElement,
        submit: Option<HtmlButtonElement>,
        original_label: Option<String>,
    }

    impl DomFormView {
        pub fn new(form: HtmlFormElement) -> Self {
            let submit = form
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .and_then(|e| e.dyn_into().ok());
            Self {
                form,
                submit,
                original_label: None,
            }
        }

        fn error_slot(&self) -> Option<HtmlElement> {
            self.form
                .query_selector(".ajax-error")
                .ok()
                .flatten()
                .and_then(|e| e.dyn_into().ok())
        }
    }

    impl FormView for DomFormView {
        fn set_busy(&mut self) {
            if let Some(button) = &self.submit {
                self.original_label = Some(button.inner_html());
                button.set_disabled(true);
                button.set_inner_html(page::BUSY_BUTTON_HTML);
            }
        }

        fn restore_idle(&mut self) {
            if let Some(button) = &self.submit {
                button.set_disabled(false);
                if let Some(label) = self.original_label.take() {
                    button.set_inner_html(&label);
                }
            }
        }

        fn clear_feedback(&mut self) {
            if let Some(slot) = self.error_slot() {
                slot.set_text_content(None);
                let _ = slot.style().set_property("display", "none");
            }
        }

        fn mark_field_invalid(&mut self, field: &str, message: &str) {
            let selector = format!("[name=\"{field}\"]");
            let Ok(Some(input)) = self.form.query_selector(&selector) else {
                return;
            };
            let _ = input.class_list().add_1("is-invalid");
            if let Some(feedback) = input.next_element_sibling() {
                if feedback.class_list().contains("invalid-feedback") {
                    feedback.set_text_content(Some(message));
                }
            }
        }

        fn show_form_error(&mut self, message: &str) {
            if let Some(slot) = self.error_slot() {
                slot.set_text_content(Some(message));
                let _ = slot.style().set_property("display", "block");
            }
        }

        fn show_flash(&mut self, message: &str) {
            page::append_flash(message);
        }

        fn navigate(&mut self, url: &str) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }

        fn reset_fields(&mut self) {
            self.form.reset();
        }
    }

    fn build_request(
        form: &HtmlFormElement,
        logger: &ConsoleLogger,
    ) -> Result<FormRequest, JsValue> {
        let form_data = FormData::new_with_form(form)?;
        let mut fields = Vec::new();
        let mut skipped = 0usize;
        if let Some(iter) = js_sys::try_iter(&form_data)? {
            for entry in iter {
                let pair = Array::from(&entry?);
                match (pair.get(0).as_string(), pair.get(1).as_string()) {
                    (Some(key), Some(value)) => fields.push((key, value)),
                    // File entries have no string value.
                    _ => skipped += 1,
                }
            }
        }
        if skipped > 0 {
            logger.warn(&format!(
                "skipped {skipped} non-text form field(s); file uploads are not sent"
            ));
        }
        let reset_on_success = form.dataset().get("resetOnSuccess").as_deref() == Some("true");
        Ok(FormRequest {
            action: form.action(),
            method: form.method(),
            fields,
            reset_on_success,
        })
    }

    fn wire_form(form: HtmlFormElement, logger: Rc<ConsoleLogger>) -> Result<(), JsValue> {
        let controller = Rc::new(AjaxFormController::new());
        let form_in_cb = form.clone();
        dom::on_event(
            form.as_ref(),
            "submit",
            Box::new(move |event| {
                event.prevent_default();
                let request = match build_request(&form_in_cb, &logger) {
                    Ok(request) => request,
                    Err(err) => {
                        logger.error(&format!("could not serialize form: {err:?}"));
                        return;
                    }
                };
                let controller = controller.clone();
                let logger = logger.clone();
                let form = form_in_cb.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut view = DomFormView::new(form);
                    let _ = controller
                        .submit(&GlooTransport, &mut view, &request, logger.as_ref())
                        .await;
                });
            }),
        )
    }

    pub fn wire_ajax_forms(document: &Document, logger: Rc<ConsoleLogger>) -> Result<(), JsValue> {
        let mut count = 0u32;
        let logger_in_cb = logger.clone();
        dom::for_each_element::<HtmlFormElement, _>(document, "form[data-ajax=\"true\"]", |form| {
            count += 1;
            wire_form(form, logger_in_cb.clone())
        })?;
        if count > 0 {
            logger.info(&format!("wired {count} ajax form(s)"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_appends_to_bare_action() {
        assert_eq!(request_url("/search", "q=ruby"), "/search?q=ruby");
    }

    #[test]
    fn query_joins_existing_query_with_ampersand() {
        assert_eq!(
            request_url("/search?page=2", "q=ruby"),
            "/search?page=2&q=ruby"
        );
    }

    #[test]
    fn empty_query_leaves_action_untouched() {
        assert_eq!(request_url("/search", ""), "/search");
        assert_eq!(request_url("/search?page=2", ""), "/search?page=2");
    }
}
