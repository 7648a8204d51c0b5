// ============================================================================
// STORAGE - Capacidad abstracta de almacenamiento clave/valor
// ============================================================================
// El Store nunca toca web_sys directamente: recibe un StorageBackend
// inyectado. En navegador es localStorage; si no hay storage disponible
// (render sin DOM, tests) se selecciona una implementación nula.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Almacenamiento clave/valor de strings, best-effort.
/// Las escrituras nunca fallan hacia el caller: cada implementación
/// absorbe sus propios errores.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage del navegador. Se resuelve en cada acceso, igual que
/// hace el resto del código con web_sys::window().
pub struct LocalStorage;

impl LocalStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::raw() {
            if storage.set_item(key, value).is_err() {
                log::warn!("⚠️ No se pudo guardar '{}' en localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::raw() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Implementación nula para entornos sin storage persistente.
pub struct NullStorage;

impl StorageBackend for NullStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Almacenamiento en memoria, sin persistencia. Lo usan los tests y
/// cualquier contexto que quiera un storage aislado.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Selecciona el backend según el entorno: localStorage si existe,
/// si no la implementación nula.
pub fn browser_storage() -> Rc<dyn StorageBackend> {
    if LocalStorage::raw().is_some() {
        Rc::new(LocalStorage)
    } else {
        log::warn!("⚠️ localStorage no disponible, las preferencias no se persistirán");
        Rc::new(NullStorage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme"), None);
        storage.set("theme", "dark");
        assert_eq!(storage.get("theme"), Some("dark".to_string()));
        storage.remove("theme");
        assert_eq!(storage.get("theme"), None);
    }

    #[test]
    fn null_storage_swallows_everything() {
        let storage = NullStorage;
        storage.set("user", "{}");
        assert_eq!(storage.get("user"), None);
        storage.remove("user");
    }
}
