pub mod forms;
pub mod page;
pub mod validation;

#[cfg(target_arch = "wasm32")]
mod charts;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod prefs;

#[cfg(target_arch = "wasm32")]
pub use wasm_shell::{start, DashboardShell};

#[cfg(target_arch = "wasm32")]
mod wasm_shell {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gemdash_charts::presets;
    use gemdash_core::{DebounceSlot, LogLevel, Logger, Period, PeriodController, Selection};
    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use crate::charts::{self, ChartRegistry, TimerSlot};
    use crate::console::ConsoleLogger;
    use crate::{dom, forms, page, prefs, validation};

    /// Owns the page wiring: charts, period selector, preferences, AJAX
    /// forms, and the small affordances. Constructed once per page load.
    #[wasm_bindgen]
    pub struct DashboardShell {
        document: Document,
        charts: ChartRegistry,
        period: Rc<RefCell<PeriodController>>,
        period_timer: TimerSlot,
        logger: Rc<ConsoleLogger>,
    }

    #[wasm_bindgen]
    impl DashboardShell {
        /// `log_level` is one of debug/info/warn/error; anything else
        /// falls back to info. Set once here, then injected everywhere.
        #[wasm_bindgen(constructor)]
        pub fn new(log_level: Option<String>) -> Result<DashboardShell, JsValue> {
            console_error_panic_hook::set_once();
            let min = log_level
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(LogLevel::Info);
            let logger = Rc::new(ConsoleLogger::new(min));
            let document = dom::document()?;

            let catalog = presets::performance_catalog();
            let period = Rc::new(RefCell::new(PeriodController::new(
                catalog.clone(),
                Period::Monthly,
            )));
            let charts = charts::init_charts(&catalog, &logger);
            let period_timer: TimerSlot = Rc::new(RefCell::new(DebounceSlot::new()));

            charts::wire_period_buttons(
                &document,
                charts.clone(),
                period.clone(),
                period_timer.clone(),
                logger.clone(),
            )?;
            charts::wire_resize(charts.clone(), logger.clone())?;

            prefs::restore_sidebar(&document);
            prefs::wire_sidebar_toggle(&document, logger.clone())?;
            prefs::init_dark_mode(&document, logger.clone())?;

            forms::wire_ajax_forms(&document, logger.clone())?;
            page::wire_flash_messages(&document)?;
            page::wire_smooth_scroll(&document)?;
            validation::wire_client_validation(&document)?;

            logger.info("dashboard shell initialized");
            Ok(DashboardShell {
                document,
                charts,
                period,
                period_timer,
                logger,
            })
        }

        /// Programmatic period switch; same path as the selector buttons,
        /// active marker included.
        #[wasm_bindgen]
        pub fn select_period(&self, key: &str) {
            let selection = self
                .period
                .borrow_mut()
                .select(key, self.logger.as_ref());
            if let Selection::Scheduled { period } = selection {
                charts::schedule_update(
                    &self.document,
                    &self.charts,
                    &self.period,
                    &self.period_timer,
                    &self.logger,
                    period,
                );
            }
        }

        /// Force an immediate layout recompute on every live chart.
        #[wasm_bindgen]
        pub fn resize_charts(&self) {
            use gemdash_core::ChartSurface;
            for chart in self.charts.borrow_mut().values_mut() {
                chart.resize();
            }
        }
    }

    /// Convenience entry point for pages that do not keep the handle:
    /// builds the shell and leaks it for the page lifetime.
    #[wasm_bindgen]
    pub fn start(log_level: Option<String>) -> Result<(), JsValue> {
        let shell = DashboardShell::new(log_level)?;
        std::mem::forget(shell);
        Ok(())
    }
}
