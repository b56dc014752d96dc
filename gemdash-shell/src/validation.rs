//! Client-side validation feedback for `.needs-validation` forms.

/// Constraint-violation flags read off a field, decoupled from the DOM so
/// message selection is testable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidityFlags {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
}

/// Feedback text for the first violated constraint, mirroring the order
/// the browser reports them in.
pub fn validity_message(
    flags: ValidityFlags,
    min: Option<&str>,
    max: Option<&str>,
) -> Option<String> {
    if flags.value_missing {
        Some("This field is required".to_string())
    } else if flags.type_mismatch {
        Some("Please enter a valid format".to_string())
    } else if flags.range_underflow {
        min.map(|m| format!("Value must be at least {m}"))
    } else if flags.range_overflow {
        max.map(|m| format!("Value must be at most {m}"))
    } else {
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::*;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
        HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use crate::dom;

    fn element_is_valid(element: &Element) -> bool {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.check_validity()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.check_validity()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.check_validity()
        } else {
            true
        }
    }

    fn feedback_slot(element: &Element) -> Option<Element> {
        element
            .next_element_sibling()
            .filter(|sibling| sibling.class_list().contains("invalid-feedback"))
    }

    fn set_feedback(element: &Element) {
        let Some(slot) = feedback_slot(element) else {
            return;
        };
        let Some(input) = element.dyn_ref::<HtmlInputElement>() else {
            return;
        };
        let validity = input.validity();
        let flags = ValidityFlags {
            value_missing: validity.value_missing(),
            type_mismatch: validity.type_mismatch(),
            range_underflow: validity.range_underflow(),
            range_overflow: validity.range_overflow(),
        };
        let min = element.get_attribute("min");
        let max = element.get_attribute("max");
        if let Some(message) = validity_message(flags, min.as_deref(), max.as_deref()) {
            slot.set_text_content(Some(&message));
        }
    }

    fn apply_invalid_feedback(form: &HtmlFormElement) -> Result<(), JsValue> {
        let invalid = form.query_selector_all(":invalid")?;
        for index in 0..invalid.length() {
            let Some(node) = invalid.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            set_feedback(&element);
            if index == 0 {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        Ok(())
    }

    pub fn wire_client_validation(document: &Document) -> Result<(), JsValue> {
        dom::for_each_element::<HtmlFormElement, _>(document, ".needs-validation", |form| {
            // Clear a field's feedback as soon as it validates again.
            let fields = form.query_selector_all("input, select, textarea")?;
            for index in 0..fields.length() {
                let Some(node) = fields.item(index) else {
                    continue;
                };
                let Ok(field) = node.dyn_into::<Element>() else {
                    continue;
                };
                let field_in_cb = field.clone();
                dom::on_event(
                    field.as_ref(),
                    "input",
                    Box::new(move |_event| {
                        if element_is_valid(&field_in_cb) {
                            if let Some(slot) = feedback_slot(&field_in_cb) {
                                slot.set_text_content(Some(""));
                            }
                        }
                    }),
                )?;
            }

            let form_in_cb = form.clone();
            dom::on_event(
                form.as_ref(),
                "submit",
                Box::new(move |event| {
                    if !form_in_cb.check_validity() {
                        event.prevent_default();
                        event.stop_propagation();
                        let _ = apply_invalid_feedback(&form_in_cb);
                    }
                    let _ = form_in_cb.class_list().add_1("was-validated");
                }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_wins_over_other_flags() {
        let flags = ValidityFlags {
            value_missing: true,
            type_mismatch: true,
            ..ValidityFlags::default()
        };
        assert_eq!(
            validity_message(flags, None, None).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn range_messages_embed_the_bound() {
        let under = ValidityFlags {
            range_underflow: true,
            ..ValidityFlags::default()
        };
        assert_eq!(
            validity_message(under, Some("1"), None).as_deref(),
            Some("Value must be at least 1")
        );
        let over = ValidityFlags {
            range_overflow: true,
            ..ValidityFlags::default()
        };
        assert_eq!(
            validity_message(over, None, Some("10")).as_deref(),
            Some("Value must be at most 10")
        );
    }

    #[test]
    fn valid_field_has_no_message() {
        assert_eq!(validity_message(ValidityFlags::default(), None, None), None);
    }
}
