// ============================================================================
// SELECT - Selector de opción única (Cerrado <-> Abierto + valor)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_text_content, ElementBuilder};

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Propiedad del valor seleccionado.
/// - Controlled: el dueño del widget aporta lectura y notificación de
///   cambio; el widget nunca guarda copia propia.
/// - Uncontrolled: el widget es dueño del valor, sembrado de un default.
pub enum SelectBinding {
    Controlled {
        value: Rc<dyn Fn() -> String>,
        on_change: Rc<dyn Fn(String)>,
    },
    Uncontrolled {
        value: RefCell<String>,
    },
}

/// Máquina de estados del selector: visibilidad + valor.
pub struct SelectState {
    open: Cell<bool>,
    binding: SelectBinding,
}

impl SelectState {
    pub fn controlled(value: Rc<dyn Fn() -> String>, on_change: Rc<dyn Fn(String)>) -> Self {
        Self {
            open: Cell::new(false),
            binding: SelectBinding::Controlled { value, on_change },
        }
    }

    pub fn uncontrolled(default: Option<&str>) -> Self {
        Self {
            open: Cell::new(false),
            binding: SelectBinding::Uncontrolled {
                value: RefCell::new(default.unwrap_or("").to_string()),
            },
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) -> bool {
        let next = !self.open.get();
        self.open.set(next);
        next
    }

    /// Click fuera: cierra sin tocar el valor.
    pub fn close(&self) {
        self.open.set(false);
    }

    /// Valor actual: el externo en modo controlled, el propio si no.
    pub fn value(&self) -> String {
        match &self.binding {
            SelectBinding::Controlled { value, .. } => value(),
            SelectBinding::Uncontrolled { value } => value.borrow().clone(),
        }
    }

    /// Click en un item: fija el valor y cierra.
    pub fn select(&self, value: &str) {
        match &self.binding {
            SelectBinding::Controlled { on_change, .. } => on_change(value.to_string()),
            SelectBinding::Uncontrolled { value: own } => *own.borrow_mut() = value.to_string(),
        }
        self.open.set(false);
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value() == value
    }

    /// Etiqueta mostrada: el label de la opción que coincide con el valor,
    /// el placeholder si no hay valor, o el valor crudo si no hay opción.
    pub fn display_label(&self, options: &[SelectOption], placeholder: &str) -> String {
        let current = self.value();
        if current.is_empty() {
            return placeholder.to_string();
        }
        options
            .iter()
            .find(|option| option.value == current)
            .map(|option| option.label.clone())
            .unwrap_or(current)
    }
}

struct SelectInner {
    root: Element,
    value_span: Element,
    state: SelectState,
    options: Vec<SelectOption>,
    placeholder: String,
    panel: RefCell<Option<(Element, Element)>>,
}

impl SelectInner {
    fn refresh_label(&self) {
        let label = self.state.display_label(&self.options, &self.placeholder);
        set_text_content(&self.value_span, &label);
    }

    fn close_panel(&self) {
        if let Some((overlay, content)) = self.panel.borrow_mut().take() {
            overlay.remove();
            content.remove();
        }
    }
}

fn open_panel(inner: &Rc<SelectInner>) -> Result<(), JsValue> {
    if inner.panel.borrow().is_some() {
        return Ok(());
    }

    let overlay = ElementBuilder::new("div")?.class("select-overlay").build();
    {
        let inner = Rc::clone(inner);
        on_click(&overlay, move |_| {
            // Fuera del panel: el valor queda intacto.
            inner.state.close();
            inner.close_panel();
        })?;
    }

    let content = ElementBuilder::new("div")?.class("select-content").build();
    for option in &inner.options {
        let class = if inner.state.is_selected(&option.value) {
            "select-item selected"
        } else {
            "select-item"
        };
        let item = ElementBuilder::new("div")?.class(class).text(&option.label).build();
        let inner_ref = Rc::clone(inner);
        let value = option.value.clone();
        on_click(&item, move |_| {
            inner_ref.state.select(&value);
            inner_ref.refresh_label();
            inner_ref.close_panel();
        })?;
        append_child(&content, &item)?;
    }

    append_child(&inner.root, &overlay)?;
    append_child(&inner.root, &content)?;
    *inner.panel.borrow_mut() = Some((overlay, content));
    Ok(())
}

/// Selector desplegable. Igual que el dropdown, el panel de opciones solo
/// existe en el DOM mientras está Abierto.
#[derive(Clone)]
pub struct Select {
    inner: Rc<SelectInner>,
}

impl Select {
    pub fn new(
        options: Vec<SelectOption>,
        placeholder: &str,
        state: SelectState,
    ) -> Result<Self, JsValue> {
        let root = ElementBuilder::new("div")?.class("select").build();
        let trigger = ElementBuilder::new("button")?
            .class("select-trigger")
            .attr("type", "button")?
            .build();
        let value_span = ElementBuilder::new("span")?.class("select-value").build();
        let chevron = ElementBuilder::new("span")?.class("select-chevron").text("▾").build();
        append_child(&trigger, &value_span)?;
        append_child(&trigger, &chevron)?;
        append_child(&root, &trigger)?;

        let inner = Rc::new(SelectInner {
            root,
            value_span,
            state,
            options,
            placeholder: placeholder.to_string(),
            panel: RefCell::new(None),
        });
        inner.refresh_label();

        {
            let inner_ref = Rc::clone(&inner);
            on_click(&trigger, move |e| {
                e.stop_propagation();
                if inner_ref.state.toggle() {
                    if let Err(err) = open_panel(&inner_ref) {
                        log::error!("❌ Error abriendo select: {:?}", err);
                    }
                } else {
                    inner_ref.close_panel();
                }
            })?;
        }

        Ok(Self { inner })
    }

    pub fn root(&self) -> &Element {
        &self.inner.root
    }

    /// Valor actual (para leer selects uncontrolled al guardar).
    pub fn value(&self) -> String {
        self.inner.state.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses() -> Vec<SelectOption> {
        vec![
            SelectOption::new("all", "Все статусы"),
            SelectOption::new("draft", "Черновик"),
            SelectOption::new("published", "Опубликовано"),
        ]
    }

    #[test]
    fn uncontrolled_without_default_shows_placeholder() {
        let state = SelectState::uncontrolled(None);
        assert_eq!(state.value(), "");
        assert_eq!(state.display_label(&statuses(), "Статус"), "Статус");
    }

    #[test]
    fn uncontrolled_select_sets_value_and_closes() {
        let state = SelectState::uncontrolled(None);
        state.toggle();
        assert!(state.is_open());

        state.select("draft");
        assert!(!state.is_open());
        assert_eq!(state.value(), "draft");
        assert_eq!(state.display_label(&statuses(), "Статус"), "Черновик");
    }

    #[test]
    fn uncontrolled_default_is_applied() {
        let state = SelectState::uncontrolled(Some("all"));
        assert_eq!(state.display_label(&statuses(), "Статус"), "Все статусы");
        assert!(state.is_selected("all"));
    }

    #[test]
    fn outside_click_keeps_value() {
        let state = SelectState::uncontrolled(None);
        state.select("published");
        state.toggle();
        state.close();
        assert_eq!(state.value(), "published");
        assert_eq!(state.display_label(&statuses(), "Статус"), "Опубликовано");
    }

    #[test]
    fn controlled_relays_changes_without_own_copy() {
        let external = Rc::new(RefCell::new("all".to_string()));
        let reads = Rc::clone(&external);
        let writes = Rc::clone(&external);
        let state = SelectState::controlled(
            Rc::new(move || reads.borrow().clone()),
            Rc::new(move |value| *writes.borrow_mut() = value),
        );

        assert_eq!(state.value(), "all");

        state.select("published");
        assert_eq!(*external.borrow(), "published");
        assert_eq!(state.value(), "published");

        // El dueño puede cambiar el valor por fuera; el widget lo refleja.
        *external.borrow_mut() = "draft".to_string();
        assert_eq!(state.display_label(&statuses(), "Статус"), "Черновик");
    }

    #[test]
    fn exactly_one_option_is_selected() {
        let state = SelectState::uncontrolled(Some("draft"));
        let marked: Vec<_> = statuses()
            .iter()
            .filter(|o| state.is_selected(&o.value))
            .map(|o| o.value.clone())
            .collect();
        assert_eq!(marked, vec!["draft".to_string()]);
    }

    #[test]
    fn unknown_value_falls_back_to_raw_value() {
        let state = SelectState::uncontrolled(Some("archived"));
        assert_eq!(state.display_label(&statuses(), "Статус"), "archived");
    }
}
