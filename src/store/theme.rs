// ============================================================================
// THEME - Modo claro/oscuro + flag de presentación en el documento
// ============================================================================

use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Forma persistida: literal "light" / "dark"
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Colaborador de presentación: aplica o quita la clase "dark" en la raíz
/// del documento. El Store lo recibe inyectado para no depender del DOM.
pub trait ThemeFlag {
    fn set_dark(&self, dark: bool);
}

/// Flag real sobre document.documentElement.
pub struct DocumentThemeFlag;

impl ThemeFlag for DocumentThemeFlag {
    fn set_dark(&self, dark: bool) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let result = if dark {
                root.class_list().add_1("dark")
            } else {
                root.class_list().remove_1("dark")
            };
            if result.is_err() {
                log::warn!("⚠️ No se pudo actualizar la clase 'dark' del documento");
            }
        }
    }
}

/// Implementación nula para contextos sin documento.
pub struct NullThemeFlag;

impl ThemeFlag for NullThemeFlag {
    fn set_dark(&self, _dark: bool) {}
}

/// Selecciona el flag según el entorno, igual que browser_storage().
pub fn document_theme_flag() -> Rc<dyn ThemeFlag> {
    let has_document = web_sys::window().and_then(|w| w.document()).is_some();
    if has_document {
        Rc::new(DocumentThemeFlag)
    } else {
        Rc::new(NullThemeFlag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn flipped_is_involutive() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }
}
