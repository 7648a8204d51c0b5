// ============================================================================
// DROPDOWN - Menú desplegable genérico (Cerrado <-> Abierto)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};

/// Máquina de estados del menú. Dos estados: Cerrado (inicial) y Abierto.
#[derive(Default)]
pub struct DropdownState {
    open: Cell<bool>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Click en el trigger. Devuelve el estado resultante.
    pub fn toggle(&self) -> bool {
        let next = !self.open.get();
        self.open.set(next);
        next
    }

    /// Click fuera del contenido, o selección de un item.
    pub fn close(&self) {
        self.open.set(false);
    }
}

struct MenuInner {
    root: Element,
    trigger: Element,
    state: DropdownState,
    header: RefCell<Option<Element>>,
    items: RefCell<Vec<Element>>,
    panel: RefCell<Option<(Element, Element)>>,
}

impl MenuInner {
    fn close_panel(&self) {
        if let Some((overlay, content)) = self.panel.borrow_mut().take() {
            overlay.remove();
            content.remove();
        }
    }
}

fn open_panel(inner: &Rc<MenuInner>) -> Result<(), JsValue> {
    if inner.panel.borrow().is_some() {
        return Ok(());
    }

    // Overlay a pantalla completa: cualquier click fuera cierra.
    let overlay = ElementBuilder::new("div")?.class("dropdown-overlay").build();
    {
        let inner = Rc::clone(inner);
        on_click(&overlay, move |_| {
            inner.state.close();
            inner.close_panel();
        })?;
    }

    let content = ElementBuilder::new("div")?.class("dropdown-content").build();
    if let Some(header) = inner.header.borrow().as_ref() {
        append_child(&content, header)?;
    }
    for item in inner.items.borrow().iter() {
        append_child(&content, item)?;
    }

    append_child(&inner.root, &overlay)?;
    append_child(&inner.root, &content)?;
    *inner.panel.borrow_mut() = Some((overlay, content));
    Ok(())
}

/// Menú desplegable. Mientras está Cerrado el contenido no existe en el
/// DOM (no solo oculto): se construye al abrir y se desmonta al cerrar.
/// Cada instancia es independiente; trigger e items solo se crean a
/// través de los métodos del propio menú.
#[derive(Clone)]
pub struct DropdownMenu {
    inner: Rc<MenuInner>,
}

impl DropdownMenu {
    pub fn new() -> Result<Self, JsValue> {
        let root = ElementBuilder::new("div")?.class("dropdown").build();
        let trigger = ElementBuilder::new("button")?
            .class("dropdown-trigger")
            .attr("type", "button")?
            .build();
        append_child(&root, &trigger)?;

        let inner = Rc::new(MenuInner {
            root,
            trigger,
            state: DropdownState::new(),
            header: RefCell::new(None),
            items: RefCell::new(Vec::new()),
            panel: RefCell::new(None),
        });

        {
            let inner_ref = Rc::clone(&inner);
            on_click(&inner.trigger, move |e| {
                e.stop_propagation();
                if inner_ref.state.toggle() {
                    if let Err(err) = open_panel(&inner_ref) {
                        log::error!("❌ Error abriendo dropdown: {:?}", err);
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

    pub fn is_open(&self) -> bool {
        self.inner.state.is_open()
    }

    /// Contenido visual del botón disparador (avatar, icono...).
    pub fn set_trigger_content(&self, content: Element) -> Result<(), JsValue> {
        append_child(&self.inner.trigger, &content)
    }

    /// Bloque no interactivo que se muestra encima de los items.
    pub fn set_header(&self, element: Element) {
        *self.inner.header.borrow_mut() = Some(element);
    }

    /// Registra un item. La acción se ejecuta primero y después el menú
    /// se cierra siempre.
    pub fn add_item<F>(&self, content: Element, on_select: F) -> Result<(), JsValue>
    where
        F: Fn() + 'static,
    {
        let item = ElementBuilder::new("div")?
            .class("dropdown-item")
            .child(content)?
            .build();
        let inner = Rc::clone(&self.inner);
        on_click(&item, move |_| {
            on_select();
            inner.state.close();
            inner.close_panel();
        })?;
        self.inner.items.borrow_mut().push(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = DropdownState::new();
        assert!(!state.is_open());
    }

    #[test]
    fn even_number_of_toggles_returns_to_closed() {
        let state = DropdownState::new();
        for _ in 0..4 {
            state.toggle();
        }
        assert!(!state.is_open());

        for _ in 0..7 {
            state.toggle();
        }
        assert!(state.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let state = DropdownState::new();
        state.toggle();
        state.close();
        assert!(!state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn instances_do_not_share_state() {
        let a = DropdownState::new();
        let b = DropdownState::new();
        a.toggle();
        assert!(a.is_open());
        assert!(!b.is_open());
    }
}
