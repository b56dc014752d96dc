pub mod catalog;
pub mod debounce;
pub mod error;
pub mod form;
pub mod logger;
pub mod period;
pub mod prefs;

pub use catalog::{DatasetCatalog, Period, Series};
pub use debounce::DebounceSlot;
pub use error::{CatalogError, SubmitError, TransportError};
pub use form::{
    AjaxFormController, FormRequest, FormResponse, FormView, SubmitOutcome, SubmitState,
    Transport, TransportReply, FLASH_AUTO_DISMISS_MS, GENERIC_ERROR_MESSAGE,
};
pub use logger::{FacadeLogger, LogLevel, Logger, NullLogger};
pub use period::{ChartSurface, PeriodController, Selection, PERIOD_DEBOUNCE_MS, RESIZE_DEBOUNCE_MS};
pub use prefs::{sidebar_collapsed, Theme, SIDEBAR_STORAGE_KEY, THEME_STORAGE_KEY};
