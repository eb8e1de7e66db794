//! Console Logger
//!
//! `log` backend for WASM frontends. Each record goes to the matching
//! `console.*` method as `[MODULE] message`.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Browser console method a record is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
    Log,
}

impl ConsoleMethod {
    /// `Trace` has no console counterpart and goes to `console.log`
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Error => ConsoleMethod::Error,
            Level::Warn => ConsoleMethod::Warn,
            Level::Info => ConsoleMethod::Info,
            Level::Debug => ConsoleMethod::Debug,
            Level::Trace => ConsoleMethod::Log,
        }
    }

    fn write(self, line: &JsValue) {
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(line),
            ConsoleMethod::Warn => web_sys::console::warn_1(line),
            ConsoleMethod::Info => web_sys::console::info_1(line),
            ConsoleMethod::Debug => web_sys::console::debug_1(line),
            ConsoleMethod::Log => web_sys::console::log_1(line),
        }
    }
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.target(), &record.args().to_string()));
        ConsoleMethod::for_level(record.level()).write(&line);
    }

    fn flush(&self) {}
}

/// Install the console logger. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Debug builds log everything down to `Debug`, release builds stop at `Info`
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Prefix a message with the last segment of its module path, upper-cased
pub fn format_line(target: &str, message: &str) -> String {
    let module = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", module.to_uppercase(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_module_segment() {
        assert_eq!(
            format_line("portfolio_ui::components::theme_picker", "picked sage"),
            "[THEME_PICKER] picked sage"
        );
    }

    #[test]
    fn test_format_line_plain_target() {
        assert_eq!(format_line("app", "mounted"), "[APP] mounted");
    }

    #[test]
    fn test_levels_route_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(Level::Error), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::Info), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(Level::Debug), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::Trace), ConsoleMethod::Log);
    }
}
