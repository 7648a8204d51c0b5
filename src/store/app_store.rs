// ============================================================================
// APP STORE - Fuente única de verdad: usuario, curso actual, tema
// ============================================================================
// Contenedor explícito e inyectable (nada de singleton): la app construye
// una instancia al arrancar y la comparte vía Rc. Cada mutación deja el
// estado en memoria, el storage persistente y el flag del documento
// mutuamente consistentes, y después notifica a los suscriptores.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Course, User};
use crate::store::theme::{Theme, ThemeFlag};
use crate::utils::storage::StorageBackend;

pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_THEME: &str = "theme";

pub struct Store {
    user: RefCell<Option<User>>,
    current_course: RefCell<Option<Course>>,
    theme: RefCell<Theme>,
    storage: Rc<dyn StorageBackend>,
    theme_flag: Rc<dyn ThemeFlag>,
    subscribers: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl Store {
    pub fn new(storage: Rc<dyn StorageBackend>, theme_flag: Rc<dyn ThemeFlag>) -> Self {
        Self {
            user: RefCell::new(None),
            current_course: RefCell::new(None),
            theme: RefCell::new(Theme::default()),
            storage,
            theme_flag,
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Reconcilia usuario y tema con el storage persistente. Se llama una
    /// sola vez al arrancar, antes del primer render. Un valor de usuario
    /// corrupto se trata como "sin sesión"; el flag del documento queda
    /// alineado con el tema resultante.
    pub fn hydrate(&self) {
        if let Some(json) = self.storage.get(STORAGE_KEY_USER) {
            match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    log::info!("✅ Sesión restaurada desde storage: {}", user.email);
                    *self.user.borrow_mut() = Some(user);
                }
                Err(e) => {
                    log::warn!("⚠️ Usuario persistido corrupto, se ignora: {}", e);
                }
            }
        }
        if let Some(value) = self.storage.get(STORAGE_KEY_THEME) {
            match Theme::parse(&value) {
                Some(theme) => *self.theme.borrow_mut() = theme,
                None => log::warn!("⚠️ Tema persistido desconocido: {}", value),
            }
        }
        self.theme_flag.set_dark(self.theme().is_dark());
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Reemplaza la identidad. Con Some persiste la copia serializada bajo
    /// "user"; con None elimina la clave. El storage es best-effort: un
    /// fallo de persistencia nunca llega al caller.
    pub fn set_user(&self, user: Option<User>) {
        match &user {
            Some(u) => match serde_json::to_string(u) {
                Ok(json) => self.storage.set(STORAGE_KEY_USER, &json),
                Err(e) => log::error!("❌ Error serializando usuario: {}", e),
            },
            None => self.storage.remove(STORAGE_KEY_USER),
        }
        *self.user.borrow_mut() = user;
        self.notify();
    }

    pub fn current_course(&self) -> Option<Course> {
        self.current_course.borrow().clone()
    }

    /// Caché de conveniencia, solo en memoria.
    pub fn set_current_course(&self, course: Option<Course>) {
        *self.current_course.borrow_mut() = course;
        self.notify();
    }

    pub fn theme(&self) -> Theme {
        *self.theme.borrow()
    }

    /// Cambia el tema: memoria + clave "theme" + clase del documento,
    /// siempre los tres juntos.
    pub fn set_theme(&self, theme: Theme) {
        *self.theme.borrow_mut() = theme;
        self.storage.set(STORAGE_KEY_THEME, theme.as_str());
        self.theme_flag.set_dark(theme.is_dark());
        self.notify();
    }

    pub fn toggle_theme(&self) {
        // Mismo camino que set_theme, sin lógica propia.
        self.set_theme(self.theme().flipped());
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::storage::{MemoryStorage, NullStorage};
    use std::cell::Cell;

    struct RecordingFlag {
        dark: Cell<bool>,
    }

    impl RecordingFlag {
        fn new() -> Rc<Self> {
            Rc::new(Self { dark: Cell::new(false) })
        }
    }

    impl ThemeFlag for RecordingFlag {
        fn set_dark(&self, dark: bool) {
            self.dark.set(dark);
        }
    }

    fn teacher() -> User {
        User {
            id: "1".into(),
            name: "Доктор Иванов".into(),
            email: "ivanov@university.edu".into(),
            role: Role::Teacher,
            avatar: None,
        }
    }

    fn fresh() -> (Rc<MemoryStorage>, Rc<RecordingFlag>, Store) {
        let storage = Rc::new(MemoryStorage::new());
        let flag = RecordingFlag::new();
        let store = Store::new(storage.clone(), flag.clone());
        (storage, flag, store)
    }

    fn assert_consistent(store: &Store, storage: &MemoryStorage, flag: &RecordingFlag) {
        match store.user() {
            Some(user) => {
                let persisted = storage.get(STORAGE_KEY_USER).expect("usuario persistido");
                assert_eq!(serde_json::from_str::<User>(&persisted).unwrap(), user);
            }
            None => assert_eq!(storage.get(STORAGE_KEY_USER), None),
        }
        assert_eq!(
            storage.get(STORAGE_KEY_THEME).as_deref(),
            Some(store.theme().as_str())
        );
        assert_eq!(flag.dark.get(), store.theme().is_dark());
    }

    #[test]
    fn cold_start_defaults() {
        let (_, _, store) = fresh();
        store.hydrate();
        assert_eq!(store.user(), None);
        assert_eq!(store.current_course(), None);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn mutation_sequences_stay_consistent() {
        let (storage, flag, store) = fresh();
        store.set_theme(Theme::Light);

        store.set_user(Some(teacher()));
        assert_consistent(&store, &storage, &flag);

        store.set_theme(Theme::Dark);
        assert_consistent(&store, &storage, &flag);

        store.toggle_theme();
        assert_consistent(&store, &storage, &flag);

        store.set_user(None);
        assert_consistent(&store, &storage, &flag);

        store.toggle_theme();
        store.set_user(Some(teacher()));
        assert_consistent(&store, &storage, &flag);
    }

    #[test]
    fn toggle_twice_returns_to_original_theme() {
        let (_, _, store) = fresh();
        let before = store.theme();
        store.toggle_theme();
        assert_ne!(store.theme(), before);
        store.toggle_theme();
        assert_eq!(store.theme(), before);
    }

    #[test]
    fn clearing_user_always_removes_persisted_key() {
        let (storage, _, store) = fresh();
        store.set_user(None);
        assert_eq!(storage.get(STORAGE_KEY_USER), None);

        store.set_user(Some(teacher()));
        assert!(storage.get(STORAGE_KEY_USER).is_some());
        store.set_user(None);
        assert_eq!(storage.get(STORAGE_KEY_USER), None);
    }

    #[test]
    fn hydrate_restores_persisted_session_and_theme() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(
            STORAGE_KEY_USER,
            &serde_json::to_string(&teacher()).unwrap(),
        );
        storage.set(STORAGE_KEY_THEME, "dark");

        let flag = RecordingFlag::new();
        let store = Store::new(storage, flag.clone());
        store.hydrate();

        assert_eq!(store.user(), Some(teacher()));
        assert_eq!(store.theme(), Theme::Dark);
        assert!(flag.dark.get());
    }

    #[test]
    fn hydrate_ignores_corrupt_persisted_user() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set(STORAGE_KEY_USER, "{definitivamente no es json");

        let flag = RecordingFlag::new();
        let store = Store::new(storage, flag);
        store.hydrate();

        assert_eq!(store.user(), None);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn works_without_storage() {
        let flag = RecordingFlag::new();
        let store = Store::new(Rc::new(NullStorage), flag.clone());
        store.hydrate();

        store.set_user(Some(teacher()));
        assert_eq!(store.user(), Some(teacher()));

        store.set_theme(Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert!(flag.dark.get());
    }

    #[test]
    fn current_course_is_memory_only() {
        let (storage, _, store) = fresh();
        store.set_current_course(Some(crate::services::mock_data::courses()[0].clone()));
        assert!(store.current_course().is_some());
        assert_eq!(storage.get("currentCourse"), None);
        assert_eq!(storage.get(STORAGE_KEY_USER), None);
    }

    #[test]
    fn subscribers_run_on_every_mutation() {
        let (_, _, store) = fresh();
        let calls = Rc::new(Cell::new(0u32));
        {
            let calls = calls.clone();
            store.subscribe(move || calls.set(calls.get() + 1));
        }
        store.set_user(Some(teacher()));
        store.set_current_course(None);
        store.set_theme(Theme::Dark);
        store.toggle_theme();
        assert_eq!(calls.get(), 4);
    }
}
