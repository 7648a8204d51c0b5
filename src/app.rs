// ============================================================================
// APP - Aplicación principal: Store + estado de UI + ciclo de render
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::models::{Assignment, ChatMessage, Course, Insight, Student, Submission};
use crate::router::Route;
use crate::services::mock_data;
use crate::store::{document_theme_flag, Store};
use crate::utils::browser_storage;
use crate::views::render_app;

/// Estado de las páginas (datos cargados, filtros, inputs). Todo vive en
/// Rc<RefCell> para poder compartirse entre closures de eventos; None en
/// los datos significa "todavía no cargado".
#[derive(Clone)]
pub struct UiState {
    pub courses: Rc<RefCell<Option<Vec<Course>>>>,
    pub courses_loading: Rc<RefCell<bool>>,
    pub assignments: Rc<RefCell<Option<Vec<Assignment>>>>,
    pub assignments_loading: Rc<RefCell<bool>>,

    // Detalle de curso (cargado para course_detail_for)
    pub course_students: Rc<RefCell<Option<Vec<Student>>>>,
    pub course_assignments: Rc<RefCell<Option<Vec<Assignment>>>>,
    pub course_detail_for: Rc<RefCell<Option<String>>>,
    pub course_detail_loading: Rc<RefCell<bool>>,

    // Filtros de la página de tareas
    pub search: Rc<RefCell<String>>,
    pub status_filter: Rc<RefCell<String>>,

    // Pantalla de revisión (cargada para review_loaded_for)
    pub review_assignment: Rc<RefCell<Option<Assignment>>>,
    pub review_submissions: Rc<RefCell<Vec<Submission>>>,
    pub review_selected: Rc<RefCell<Option<usize>>>,
    pub review_loaded_for: Rc<RefCell<Option<String>>>,
    pub review_loading: Rc<RefCell<bool>>,
    pub feedback_input: Rc<RefCell<String>>,
    pub generating_feedback: Rc<RefCell<bool>>,

    // Analítica (cargada para insights_for)
    pub insights: Rc<RefCell<Option<Vec<Insight>>>>,
    pub insights_for: Rc<RefCell<Option<String>>>,
    pub insights_loading: Rc<RefCell<bool>>,

    // Asistente
    pub chat_messages: Rc<RefCell<Vec<ChatMessage>>>,
    pub chat_input: Rc<RefCell<String>>,
    pub chat_sending: Rc<RefCell<bool>>,

    // Login
    pub login_email: Rc<RefCell<String>>,
    pub login_password: Rc<RefCell<String>>,
    pub login_loading: Rc<RefCell<bool>>,
    pub login_error: Rc<RefCell<Option<String>>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            courses: Rc::new(RefCell::new(None)),
            courses_loading: Rc::new(RefCell::new(false)),
            assignments: Rc::new(RefCell::new(None)),
            assignments_loading: Rc::new(RefCell::new(false)),

            course_students: Rc::new(RefCell::new(None)),
            course_assignments: Rc::new(RefCell::new(None)),
            course_detail_for: Rc::new(RefCell::new(None)),
            course_detail_loading: Rc::new(RefCell::new(false)),

            search: Rc::new(RefCell::new(String::new())),
            status_filter: Rc::new(RefCell::new("all".to_string())),

            review_assignment: Rc::new(RefCell::new(None)),
            review_submissions: Rc::new(RefCell::new(Vec::new())),
            review_selected: Rc::new(RefCell::new(None)),
            review_loaded_for: Rc::new(RefCell::new(None)),
            review_loading: Rc::new(RefCell::new(false)),
            feedback_input: Rc::new(RefCell::new(String::new())),
            generating_feedback: Rc::new(RefCell::new(false)),

            insights: Rc::new(RefCell::new(None)),
            insights_for: Rc::new(RefCell::new(None)),
            insights_loading: Rc::new(RefCell::new(false)),

            chat_messages: Rc::new(RefCell::new(vec![mock_data::chat_greeting()])),
            chat_input: Rc::new(RefCell::new(String::new())),
            chat_sending: Rc::new(RefCell::new(false)),

            // Valores por defecto de la demo
            login_email: Rc::new(RefCell::new("ivanov@university.edu".to_string())),
            login_password: Rc::new(RefCell::new("password".to_string())),
            login_loading: Rc::new(RefCell::new(false)),
            login_error: Rc::new(RefCell::new(None)),
        }
    }

    /// Al cerrar sesión se descartan los datos cargados; el siguiente
    /// usuario vuelve a pedirlos.
    pub fn reset(&self) {
        *self.courses.borrow_mut() = None;
        *self.assignments.borrow_mut() = None;
        *self.course_students.borrow_mut() = None;
        *self.course_assignments.borrow_mut() = None;
        *self.course_detail_for.borrow_mut() = None;
        *self.search.borrow_mut() = String::new();
        *self.status_filter.borrow_mut() = "all".to_string();
        *self.review_assignment.borrow_mut() = None;
        self.review_submissions.borrow_mut().clear();
        *self.review_selected.borrow_mut() = None;
        *self.review_loaded_for.borrow_mut() = None;
        *self.feedback_input.borrow_mut() = String::new();
        *self.insights.borrow_mut() = None;
        *self.insights_for.borrow_mut() = None;
        *self.chat_messages.borrow_mut() = vec![mock_data::chat_greeting()];
        *self.chat_input.borrow_mut() = String::new();
        *self.login_error.borrow_mut() = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Dependencias compartidas por todas las vistas.
#[derive(Clone)]
pub struct AppContext {
    pub store: Rc<Store>,
    pub ui: UiState,
    pub route: Rc<RefCell<Route>>,
}

impl AppContext {
    /// Navegación: un único camino, siempre vía el hash de la URL.
    /// El listener de hashchange actualiza la ruta y re-renderiza.
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.hash());
        }
    }
}

/// Aplicación principal
pub struct App {
    ctx: AppContext,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let store = Rc::new(Store::new(browser_storage(), document_theme_flag()));
        // Reconciliar usuario/tema con localStorage antes del primer render
        store.hydrate();

        // Re-render automático ante cualquier mutación del Store,
        // batcheado con un Timeout(0)
        store.subscribe(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        let route = Rc::new(RefCell::new(Route::parse(&current_hash())));

        Ok(Self {
            ctx: AppContext {
                store,
                ui: UiState::new(),
                route,
            },
            root,
        })
    }

    pub fn context(&self) -> AppContext {
        self.ctx.clone()
    }

    /// Releer la ruta desde el hash actual (tras un hashchange).
    pub fn sync_route_from_hash(&self) {
        *self.ctx.route.borrow_mut() = Route::parse(&current_hash());
    }

    /// Renderizar la aplicación completa
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.ctx)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
