use std::sync::OnceLock;

use ganzhi_config::EngineConfig;

use crate::error::GanzhiError;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();
static DEFAULTS: OnceLock<EngineConfig> = OnceLock::new();

/// Validate and install the process-wide configuration.
///
/// May be called once. Later calls return [`GanzhiError::AlreadyInitialized`]
/// and leave the stored configuration untouched.
pub fn init(config: EngineConfig) -> Result<(), GanzhiError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| GanzhiError::AlreadyInitialized)?;
    tracing::info!("ganzhi engine initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// The installed configuration, or the defaults when [`init`] was never called.
pub fn config() -> &'static EngineConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULTS.get_or_init(EngineConfig::default))
}
