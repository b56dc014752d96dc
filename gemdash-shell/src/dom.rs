use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Attach a leaked event handler. Listeners installed at boot live for the
/// page lifetime, so forgetting the closure is the intended ownership.
pub fn on_event(
    target: &EventTarget,
    kind: &str,
    handler: Box<dyn FnMut(Event)>,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(handler);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run `f` for every node matching `selector` that casts to `T`.
pub fn for_each_element<T, F>(document: &Document, selector: &str, mut f: F) -> Result<(), JsValue>
where
    T: JsCast,
    F: FnMut(T) -> Result<(), JsValue>,
{
    let nodes = document.query_selector_all(selector)?;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<T>() {
            f(element)?;
        }
    }
    Ok(())
}
