use crate::catalog::{DatasetCatalog, Period};
use crate::debounce::DebounceSlot;
use crate::logger::Logger;

/// Quiet window before a period selection is applied to the chart.
pub const PERIOD_DEBOUNCE_MS: u32 = 100;
/// Quiet window before viewport resizes are propagated to live charts.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Live chart the controller rebinds on period changes. The rendering
/// library behind it is a black box; `replace_data` must swap labels and
/// both series in one step so the chart never draws a mixed frame.
pub trait ChartSurface {
    fn replace_data(&mut self, labels: &[String], purchases: &[f64], sales: &[f64]);
    fn redraw(&mut self);
    fn resize(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Valid key: the active marker moved and an update is pending. The
    /// host should (re)arm its debounce timer for [`PERIOD_DEBOUNCE_MS`].
    Scheduled { period: Period },
    /// Unknown key or no catalog entry; nothing changed.
    Ignored,
}

/// Switches a chart between the catalog's period datasets, coalescing
/// rapid selections into a single redraw. The timer itself lives with the
/// host; this controller only tracks which selection is pending, so the
/// supersede rule (last selection wins, no queueing) is testable without
/// a clock.
pub struct PeriodController {
    catalog: DatasetCatalog,
    active: Period,
    pending: DebounceSlot<Period>,
}

impl PeriodController {
    pub fn new(catalog: DatasetCatalog, initial: Period) -> Self {
        Self {
            catalog,
            active: initial,
            pending: DebounceSlot::new(),
        }
    }

    /// Currently marked period. Moves synchronously on selection, before
    /// the debounced redraw lands.
    pub fn active(&self) -> Period {
        self.active
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_armed()
    }

    pub fn select(&mut self, key: &str, logger: &dyn Logger) -> Selection {
        let Some(period) = Period::from_key(key) else {
            logger.debug(&format!("ignoring unknown chart period key: {key}"));
            return Selection::Ignored;
        };
        if !self.catalog.contains(period) {
            logger.debug(&format!("no dataset for period: {}", period.key()));
            return Selection::Ignored;
        }
        self.active = period;
        if self.pending.arm(period).is_some() {
            logger.debug("superseding pending chart update");
        }
        Selection::Scheduled { period }
    }

    /// Apply the pending selection: one data swap, one redraw. Returns
    /// whether a redraw happened. A missing surface is non-fatal; the
    /// selection is dropped and logged.
    pub fn fire<S: ChartSurface>(&mut self, surface: Option<&mut S>, logger: &dyn Logger) -> bool {
        let Some(period) = self.pending.take() else {
            return false;
        };
        let Some(surface) = surface else {
            logger.warn("chart surface unavailable; dropping period update");
            return false;
        };
        let Some(series) = self.catalog.series(period) else {
            // contains() was checked in select(); catalog is immutable.
            return false;
        };
        surface.replace_data(&series.labels, &series.purchases, &series.sales);
        surface.redraw();
        logger.debug(&format!("chart updated for period: {}", period.key()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Series;
    use crate::logger::NullLogger;

    #[derive(Default)]
    struct FakeChart {
        labels: Vec<String>,
        purchases: Vec<f64>,
        sales: Vec<f64>,
        redraws: usize,
        resizes: usize,
    }

    impl ChartSurface for FakeChart {
        fn replace_data(&mut self, labels: &[String], purchases: &[f64], sales: &[f64]) {
            self.labels = labels.to_vec();
            self.purchases = purchases.to_vec();
            self.sales = sales.to_vec();
        }

        fn redraw(&mut self) {
            self.redraws += 1;
        }

        fn resize(&mut self) {
            self.resizes += 1;
        }
    }

    fn catalog() -> DatasetCatalog {
        DatasetCatalog::try_new([
            (
                Period::Monthly,
                Series::new(["Jan", "Feb"], vec![1.0, 2.0], vec![3.0, 4.0]),
            ),
            (
                Period::Quarterly,
                Series::new(["Q1"], vec![10.0], vec![20.0]),
            ),
            (
                Period::Yearly,
                Series::new(["2024"], vec![100.0], vec![200.0]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn burst_of_selections_coalesces_to_last() {
        let mut ctrl = PeriodController::new(catalog(), Period::Monthly);
        let mut chart = FakeChart::default();

        assert_eq!(
            ctrl.select("quarterly", &NullLogger),
            Selection::Scheduled { period: Period::Quarterly }
        );
        assert_eq!(
            ctrl.select("yearly", &NullLogger),
            Selection::Scheduled { period: Period::Yearly }
        );
        assert_eq!(ctrl.active(), Period::Yearly);

        // One timer expiry for the whole burst.
        assert!(ctrl.fire(Some(&mut chart), &NullLogger));
        assert_eq!(chart.labels, vec!["2024".to_string()]);
        assert_eq!(chart.purchases, vec![100.0]);
        assert_eq!(chart.sales, vec![200.0]);
        assert_eq!(chart.redraws, 1);

        // Nothing left pending.
        assert!(!ctrl.fire(Some(&mut chart), &NullLogger));
        assert_eq!(chart.redraws, 1);
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut ctrl = PeriodController::new(catalog(), Period::Monthly);
        let mut chart = FakeChart::default();

        assert_eq!(ctrl.select("weekly", &NullLogger), Selection::Ignored);
        assert_eq!(ctrl.active(), Period::Monthly);
        assert!(!ctrl.has_pending());
        assert!(!ctrl.fire(Some(&mut chart), &NullLogger));
        assert!(chart.labels.is_empty());
        assert_eq!(chart.redraws, 0);
    }

    #[test]
    fn missing_surface_drops_update_without_panic() {
        let mut ctrl = PeriodController::new(catalog(), Period::Monthly);
        ctrl.select("quarterly", &NullLogger);
        assert!(!ctrl.fire(None::<&mut FakeChart>, &NullLogger));
        assert!(!ctrl.has_pending());
    }

    #[test]
    fn active_marker_moves_before_fire() {
        let mut ctrl = PeriodController::new(catalog(), Period::Monthly);
        ctrl.select("quarterly", &NullLogger);
        assert_eq!(ctrl.active(), Period::Quarterly);
        assert!(ctrl.has_pending());
    }
}
