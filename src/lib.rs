// ============================================================================
// SYNAPSEAI - AI TEACHING ASSISTANT - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica de negocio)
// - Widgets: Componentes compuestos con estado de interacción propio
// - Services: API simulada + datos de demo
// - Store: Estado global (usuario/curso/tema) con persistencia best-effort
// - Models: Estructuras de dominio
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod store;
pub mod utils;
pub mod views;
pub mod widgets;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la app para poder re-renderizar desde cualquier vista
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 {} - AI Teaching Assistant (Rust puro + MVVM)", CONFIG.app_title);

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listener global de hashchange: se registra UNA sola vez aquí
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            APP.with(|cell| {
                if let Some(app) = cell.borrow().as_ref() {
                    app.sync_route_from_hash();
                    if let Err(e) = app.render() {
                        log::error!("❌ Error renderizando tras hashchange: {:?}", e);
                    }
                }
            });
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la aplicación completa. Lo invocan las vistas y la
/// suscripción del Store cuando cambia el estado.
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando app: {:?}", e);
            }
        }
    });
}
