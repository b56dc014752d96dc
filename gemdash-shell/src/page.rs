//! Flash messages and small page affordances.

/// Markup for a dismissible success flash. The close button carries the
/// same hooks the server-rendered alerts use.
pub fn flash_markup(message: &str) -> String {
    format!(
        "{message}\n<button type=\"button\" class=\"btn-close\" \
         data-bs-dismiss=\"alert\" aria-label=\"Close\"></button>"
    )
}

/// Busy label swapped into the submit button while a request is in flight.
pub const BUSY_BUTTON_HTML: &str = "<span class=\"spinner-border spinner-border-sm\" \
     role=\"status\" aria-hidden=\"true\"></span> Processing...";

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;

    use gemdash_core::FLASH_AUTO_DISMISS_MS;
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

    use crate::dom;

    /// Render a flash into `#flash-messages`. No container, no flash; the
    /// message was already acted on, so this degrades silently.
    pub fn append_flash(message: &str) {
        let Ok(document) = dom::document() else {
            return;
        };
        let Some(container) = document.get_element_by_id("flash-messages") else {
            return;
        };
        let Ok(alert) = document.create_element("div") else {
            return;
        };
        alert.set_class_name("alert alert-success alert-dismissible fade show");
        let _ = alert.set_attribute("role", "alert");
        alert.set_inner_html(&flash_markup(message));
        if container.append_child(&alert).is_ok() {
            dismiss_later(alert);
        }
    }

    /// Wire the close button and start the auto-dismiss window.
    fn dismiss_later(alert: Element) {
        if let Ok(Some(close)) = alert.query_selector(".btn-close") {
            let alert_in_cb = alert.clone();
            let _ = dom::on_event(
                close.as_ref(),
                "click",
                Box::new(move |_event| alert_in_cb.remove()),
            );
        }
        Timeout::new(FLASH_AUTO_DISMISS_MS, move || alert.remove()).forget();
    }

    /// Fade in and auto-dismiss the alerts the server rendered into the
    /// page.
    pub fn wire_flash_messages(document: &Document) -> Result<(), JsValue> {
        dom::for_each_element::<Element, _>(document, ".alert-dismissible", |alert| {
            let _ = alert.class_list().add_1("fade-in");
            dismiss_later(alert);
            Ok(())
        })
    }

    /// Smooth-scroll same-page anchors. Each anchor gets its own
    /// subscription; there is no delegated click sniffing.
    pub fn wire_smooth_scroll(document: &Document) -> Result<(), JsValue> {
        let doc_in_cb = document.clone();
        dom::for_each_element::<HtmlElement, _>(document, "a[href^=\"#\"]", move |anchor| {
            let document = doc_in_cb.clone();
            let target_href = anchor.get_attribute("href");
            dom::on_event(
                anchor.as_ref(),
                "click",
                Box::new(move |event| {
                    let Some(href) = target_href.as_deref() else {
                        return;
                    };
                    if href == "#" {
                        return;
                    }
                    if let Ok(Some(target)) = document.query_selector(href) {
                        event.prevent_default();
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_markup_keeps_message_and_close_button() {
        let markup = flash_markup("Sale recorded");
        assert!(markup.starts_with("Sale recorded"));
        assert!(markup.contains("btn-close"));
        assert!(markup.contains("data-bs-dismiss=\"alert\""));
    }

    #[test]
    fn busy_label_is_a_spinner() {
        assert!(BUSY_BUTTON_HTML.contains("spinner-border"));
        assert!(BUSY_BUTTON_HTML.ends_with("Processing..."));
    }
}
