// ============================================================================
// STORE MODULE - Estado global de sesión/UI con persistencia best-effort
// ============================================================================

pub mod theme;
pub mod app_store;

pub use theme::{document_theme_flag, DocumentThemeFlag, NullThemeFlag, Theme, ThemeFlag};
pub use app_store::{Store, STORAGE_KEY_THEME, STORAGE_KEY_USER};
