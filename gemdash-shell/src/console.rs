use gemdash_core::{LogLevel, Logger};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser-console backend for the injected logger. The minimum level is
/// fixed at shell construction; there is no runtime-mutable global.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    min: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min: LogLevel) -> Self {
        Self { min }
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {message}",
            level.as_str().to_ascii_uppercase()
        ));
        match level {
            LogLevel::Debug => console::debug_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Error => console::error_1(&line),
        }
    }
}
