pub mod files;
pub mod settings;

pub use files::{atomic_write, ensure_app_dir, log_file, read_file, settings_file};
pub use settings::{load_settings, save_settings, Settings};
