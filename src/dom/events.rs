// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS: para listeners en elementos del DOM, cuando el
// elemento se destruye (p.ej. con set_inner_html("")) el navegador limpia
// los listeners asociados, así que closure.forget() es seguro. Listeners
// globales (window/document) se registran UNA sola vez al inicio de la app.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_keydown<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Valor actual de un input de texto a partir del target del evento.
pub fn input_value(event: &Event) -> Option<String> {
    use wasm_bindgen::JsCast;
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(area.value());
    }
    None
}
