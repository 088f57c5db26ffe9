use log::Level;

/// Route `log` records to the browser console; later calls are no-ops.
pub fn init_logging() {
    if console_log::init_with_level(Level::Info).is_ok() {
        log::debug!("console logging ready");
    }
}
