//! Sidebar and theme preferences, persisted in localStorage.

use std::rc::Rc;

use gemdash_core::{sidebar_collapsed, Logger, Theme, SIDEBAR_STORAGE_KEY, THEME_STORAGE_KEY};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MediaQueryListEvent, Storage};

use crate::console::ConsoleLogger;
use crate::dom;

const SIDEBAR_CLASS: &str = "sb-sidenav-toggled";
const DARK_MODE_CLASS: &str = "dark-mode";
const SUN_ICON: &str = r#"<i class="fas fa-sun"></i>"#;
const MOON_ICON: &str = r#"<i class="fas fa-moon"></i>"#;

fn local_storage() -> Result<Storage, JsValue> {
    let storage = dom::window()?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    Ok(storage)
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage().ok().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn storage_set(key: &str, value: &str, logger: &ConsoleLogger) {
    match local_storage() {
        Ok(storage) => {
            if storage.set_item(key, value).is_err() {
                logger.warn(&format!("could not persist preference {key}"));
            }
        }
        Err(_) => logger.warn("localStorage unavailable; preference not saved"),
    }
}

pub fn restore_sidebar(document: &Document) {
    if sidebar_collapsed(storage_get(SIDEBAR_STORAGE_KEY).as_deref()) {
        if let Some(body) = document.body() {
            let _ = body.class_list().add_1(SIDEBAR_CLASS);
        }
    }
}

pub fn wire_sidebar_toggle(document: &Document, logger: Rc<ConsoleLogger>) -> Result<(), JsValue> {
    let Some(toggle) = document.get_element_by_id("sidebarToggle") else {
        return Ok(());
    };
    let document = document.clone();
    dom::on_event(
        toggle.as_ref(),
        "click",
        Box::new(move |event| {
            event.prevent_default();
            let Some(body) = document.body() else {
                return;
            };
            let collapsed = body.class_list().toggle(SIDEBAR_CLASS).unwrap_or(false);
            storage_set(
                SIDEBAR_STORAGE_KEY,
                if collapsed { "true" } else { "false" },
                &logger,
            );
        }),
    )
}

fn apply_theme(document: &Document, toggle: &HtmlElement, theme: Theme) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = if theme.is_dark() {
            classes.add_1(DARK_MODE_CLASS)
        } else {
            classes.remove_1(DARK_MODE_CLASS)
        };
    }
    toggle.set_inner_html(if theme.is_dark() { SUN_ICON } else { MOON_ICON });
    let _ = toggle.set_attribute(
        "aria-label",
        if theme.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        },
    );
}

pub fn init_dark_mode(document: &Document, logger: Rc<ConsoleLogger>) -> Result<(), JsValue> {
    let Some(toggle) = document.get_element_by_id("darkModeToggle") else {
        return Ok(());
    };
    let toggle: HtmlElement = toggle
        .dyn_into()
        .map_err(|_| JsValue::from_str("darkModeToggle is not an HTMLElement"))?;

    let media = dom::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten();
    let os_prefers_dark = media.as_ref().map(|m| m.matches()).unwrap_or(false);

    let initial = Theme::resolve(storage_get(THEME_STORAGE_KEY).as_deref(), os_prefers_dark);
    apply_theme(document, &toggle, initial);

    {
        let document = document.clone();
        let toggle_in_cb = toggle.clone();
        let logger = logger.clone();
        dom::on_event(
            toggle.as_ref(),
            "click",
            Box::new(move |_event| {
                let dark_now = document
                    .body()
                    .map(|b| b.class_list().contains(DARK_MODE_CLASS))
                    .unwrap_or(false);
                let next = if dark_now { Theme::Light } else { Theme::Dark };
                storage_set(THEME_STORAGE_KEY, next.as_str(), &logger);
                apply_theme(&document, &toggle_in_cb, next);
            }),
        )?;
    }

    // Follow OS changes only while the user has not chosen explicitly.
    if let Some(media) = media {
        let document = document.clone();
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut(MediaQueryListEvent)>::wrap(Box::new(
            move |event: MediaQueryListEvent| {
                if storage_get(THEME_STORAGE_KEY).is_none() {
                    let theme = if event.matches() { Theme::Dark } else { Theme::Light };
                    apply_theme(&document, &toggle, theme);
                }
            },
        ));
        media.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
