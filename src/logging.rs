use log::Level;

/// Routes the `log` macros to the browser console.
///
/// Only the first call installs the logger; later calls keep the original
/// level.
pub fn init_logging(level: Level) {
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Console logger already installed: {}", err).into());
    }
}
