//! Dashboard chart construction, period selector wiring, and the
//! process-wide debounced resize.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gemdash_charts::presets;
use gemdash_charts::ChartHandle;
use gemdash_core::{
    ChartSurface, DebounceSlot, Logger, Period, PeriodController, Selection, PERIOD_DEBOUNCE_MS,
    RESIZE_DEBOUNCE_MS,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::console::ConsoleLogger;
use crate::dom;

pub const PERFORMANCE_CANVAS_ID: &str = "performanceChart";
pub const PROFIT_CANVAS_ID: &str = "profitChart";
pub const TRANSACTION_CANVAS_ID: &str = "transactionChart";

/// Every live chart on the page, keyed by canvas id. Shared with the
/// resize listener and the period-update timer.
pub type ChartRegistry = Rc<RefCell<HashMap<&'static str, ChartHandle>>>;

/// Single slot for the pending period-update timer; arming drops (and
/// thereby cancels) the superseded timeout.
pub type TimerSlot = Rc<RefCell<DebounceSlot<Timeout>>>;

/// Build whichever dashboard charts have a canvas on this page. A missing
/// canvas or context is logged and skipped; the rest of the page works
/// without it.
pub fn init_charts(catalog: &gemdash_core::DatasetCatalog, logger: &ConsoleLogger) -> ChartRegistry {
    let mut charts = HashMap::new();

    if let Some(series) = catalog.series(Period::Monthly) {
        match ChartHandle::new(PERFORMANCE_CANVAS_ID, &presets::performance_config(series)) {
            Ok(handle) => {
                charts.insert(PERFORMANCE_CANVAS_ID, handle);
            }
            Err(err) => logger.warn(&format!("performance chart unavailable: {err:?}")),
        }
    }
    match ChartHandle::new(PROFIT_CANVAS_ID, &presets::profit_config()) {
        Ok(handle) => {
            charts.insert(PROFIT_CANVAS_ID, handle);
        }
        Err(err) => logger.warn(&format!("profit chart unavailable: {err:?}")),
    }
    match ChartHandle::new(TRANSACTION_CANVAS_ID, &presets::transactions_config()) {
        Ok(handle) => {
            charts.insert(TRANSACTION_CANVAS_ID, handle);
        }
        Err(err) => logger.warn(&format!("transaction chart unavailable: {err:?}")),
    }

    Rc::new(RefCell::new(charts))
}

/// (Re)arm the debounce timer for the pending period selection.
pub fn arm_period_timer(
    charts: &ChartRegistry,
    controller: &Rc<RefCell<PeriodController>>,
    slot: &TimerSlot,
    logger: &Rc<ConsoleLogger>,
) {
    let charts = charts.clone();
    let controller = controller.clone();
    let logger = logger.clone();
    let timeout = Timeout::new(PERIOD_DEBOUNCE_MS, move || {
        let mut charts = charts.borrow_mut();
        let surface = charts.get_mut(PERFORMANCE_CANVAS_ID);
        controller.borrow_mut().fire(surface, logger.as_ref());
    });
    drop(slot.borrow_mut().arm(timeout));
}

/// Shared tail of every scheduled selection: move the visible active
/// marker, then (re)arm the debounce timer. Both the button path and the
/// programmatic path go through here so the marker can never go stale.
pub fn schedule_update(
    document: &Document,
    charts: &ChartRegistry,
    controller: &Rc<RefCell<PeriodController>>,
    slot: &TimerSlot,
    logger: &Rc<ConsoleLogger>,
    period: Period,
) {
    let _ = mark_active_button(document, period);
    arm_period_timer(charts, controller, slot, logger);
}

fn mark_active_button(document: &Document, period: Period) -> Result<(), JsValue> {
    dom::for_each_element::<HtmlElement, _>(document, "[data-chart-period]", |button| {
        let classes = button.class_list();
        if button.get_attribute("data-chart-period").as_deref() == Some(period.key()) {
            classes.add_1("active")?;
        } else {
            classes.remove_1("active")?;
        }
        Ok(())
    })
}

/// One subscription per selector button; the clicked button's own
/// attribute names the period, so there is no delegated target sniffing.
pub fn wire_period_buttons(
    document: &Document,
    charts: ChartRegistry,
    controller: Rc<RefCell<PeriodController>>,
    slot: TimerSlot,
    logger: Rc<ConsoleLogger>,
) -> Result<(), JsValue> {
    let doc_in_cb = document.clone();
    dom::for_each_element::<HtmlElement, _>(document, "[data-chart-period]", move |button| {
        let document = doc_in_cb.clone();
        let charts = charts.clone();
        let controller = controller.clone();
        let slot = slot.clone();
        let logger = logger.clone();
        let key = button.get_attribute("data-chart-period");
        dom::on_event(
            button.as_ref(),
            "click",
            Box::new(move |_event| {
                let Some(key) = key.as_deref() else {
                    return;
                };
                let selection = controller.borrow_mut().select(key, logger.as_ref());
                if let Selection::Scheduled { period } = selection {
                    schedule_update(&document, &charts, &controller, &slot, &logger, period);
                }
            }),
        )
    })
}

/// One window-level listener; resizes are coalesced under a single
/// process-wide timer and applied to every live chart.
pub fn wire_resize(charts: ChartRegistry, logger: Rc<ConsoleLogger>) -> Result<(), JsValue> {
    let slot: TimerSlot = Rc::new(RefCell::new(DebounceSlot::new()));
    let window = dom::window()?;
    dom::on_event(
        window.as_ref(),
        "resize",
        Box::new(move |_event| {
            let charts = charts.clone();
            let logger = logger.clone();
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                let mut charts = charts.borrow_mut();
                logger.debug(&format!("resizing {} chart(s)", charts.len()));
                for chart in charts.values_mut() {
                    chart.resize();
                }
            });
            drop(slot.borrow_mut().arm(timeout));
        }),
    )
}
