pub mod config;
pub mod presets;

#[cfg(target_arch = "wasm32")]
mod handle;

pub use config::{ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Paint};

#[cfg(target_arch = "wasm32")]
pub use handle::ChartHandle;
