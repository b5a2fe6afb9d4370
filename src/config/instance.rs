//! config singleton management stuff
use {
    crate::config::options::HueWheel,
    color_eyre::{Result, eyre::Context},
    std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
    tracing::warn,
};

/// global config instance
static CONFIG: LazyLock<RwLock<HueWheel>> = LazyLock::new(|| {
    RwLock::new(HueWheel::load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load configuration, falling back to defaults");
        HueWheel::default()
    }))
});

/// init the config explicitly, surfacing load errors instead of falling back
///
/// # Errors
///
/// returns an error if the config can't be loaded or the lock is poisoned
pub fn init_config() -> Result<()> {
    let loaded = HueWheel::load().wrap_err("Failed to load configuration")?;
    *config_mut()? = loaded;
    Ok(())
}

/// get a ro ref to the config
pub fn config() -> Result<RwLockReadGuard<'static, HueWheel>> {
    CONFIG
        .read()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// get a rw ref to the config
pub fn config_mut() -> Result<RwLockWriteGuard<'static, HueWheel>> {
    CONFIG
        .write()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration lock poisoned: {}", e))
}

/// get a specific config value with a default fallback
pub fn get_or_default<T, F>(getter: F, default: T) -> T
where
    F: FnOnce(&HueWheel) -> Option<T>,
    T: Clone,
{
    config()
        .ok()
        .and_then(|cfg| getter(&cfg))
        .unwrap_or(default)
}
