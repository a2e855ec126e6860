use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const KEY_API_ORIGIN: &str = "ecosync_api_origin";
const KEY_DEFAULT_USER: &str = "ecosync_default_user";
const KEY_LOG_LEVEL: &str = "ecosync_log_level";
const KEY_DARK_MODE: &str = "ecosync_dark_mode";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend origin, scheme + host + port, no trailing slash
    pub api_origin: String,

    /// User shown on the payment dashboard when the URL names none
    pub default_user_id: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Start in dark mode
    pub dark_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: "http://localhost:8080".to_string(),
            default_user_id: "USER2".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            dark_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(origin)) = storage.get_item(KEY_API_ORIGIN) {
                let origin = origin.trim().trim_end_matches('/');
                if !origin.is_empty() {
                    settings.api_origin = origin.to_string();
                }
            }

            if let Ok(Some(user)) = storage.get_item(KEY_DEFAULT_USER) {
                if !user.trim().is_empty() {
                    settings.default_user_id = user.trim().to_string();
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(KEY_LOG_LEVEL) {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Ok(Some(dark)) = storage.get_item(KEY_DARK_MODE) {
                settings.dark_mode = dark == "true";
            }
        }

        settings
    }

    /// Persist the dark mode choice so the next visit starts in the same theme
    pub fn save_dark_mode(dark: bool) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(KEY_DARK_MODE, &dark.to_string())?;
            }
        }
        Ok(())
    }

    /// Full URL for a backend path such as `/api/waste/drivers/all`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_origin, path)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
