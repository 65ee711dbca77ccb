//! User configuration: directory layout, `settings.conf` parsing and skeleton creation.

mod paths;
mod settings;
mod skeleton;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{
    API_URL_ENV, Settings, apply_env_overrides, load_settings_from, parse_settings, settings,
};
pub use skeleton::{SETTINGS_SKELETON_CONTENT, ensure_settings_file};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
