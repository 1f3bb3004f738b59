//! Logging setup for honeybee-vtk-rs.

/// Installs `env_logger` as the log backend.
///
/// Log levels come from `RUST_LOG`. Calling this more than once, or after
/// another logger was installed, does nothing.
///
/// # Example
///
/// ```no_run
/// honeybee_vtk::init();
/// log::info!("ready");
/// ```
pub fn init() {
    if env_logger::try_init().is_ok() {
        log::info!("honeybee-vtk-rs initialized");
    }
}
