// ============================================================================
// TOPBAR - Búsqueda, tema, notificaciones y menú de usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::store::Theme;
use crate::views::ui;
use crate::widgets::DropdownMenu;

pub fn render_topbar(ctx: &AppContext) -> Result<Element, JsValue> {
    let topbar = ElementBuilder::new("div")?.class("topbar").build();

    // Búsqueda global
    let search_wrap = ElementBuilder::new("div")?.class("topbar-search").build();
    let search_input = ElementBuilder::new("input")?
        .class("input search-input")
        .attr("type", "search")?
        .attr("placeholder", "Поиск курсов, заданий...")?
        .build();
    append_child(&search_wrap, &search_input)?;
    append_child(&topbar, &search_wrap)?;

    let actions = ElementBuilder::new("div")?.class("topbar-actions").build();

    // Toggle de tema: luna en claro, sol en oscuro
    let theme_icon = match ctx.store.theme() {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };
    let theme_btn = ui::button(theme_icon, "icon-button")?;
    {
        let store = ctx.store.clone();
        on_click(&theme_btn, move |_| {
            store.toggle_theme();
        })?;
    }
    append_child(&actions, &theme_btn)?;

    // Notificaciones (decorativo en la demo)
    let bell_btn = ui::button("🔔", "icon-button bell")?;
    let bell_dot = ElementBuilder::new("span")?.class("bell-dot").build();
    append_child(&bell_btn, &bell_dot)?;
    append_child(&actions, &bell_btn)?;

    // Menú de usuario
    if let Some(user) = ctx.store.user() {
        let menu = DropdownMenu::new()?;
        menu.set_trigger_content(ui::avatar(&user.initials())?)?;

        let header = ElementBuilder::new("div")?.class("dropdown-user").build();
        let name = ElementBuilder::new("p")?
            .class("dropdown-user-name")
            .text(&user.name)
            .build();
        let email = ElementBuilder::new("p")?
            .class("dropdown-user-email")
            .text(&user.email)
            .build();
        append_child(&header, &name)?;
        append_child(&header, &email)?;
        menu.set_header(header);

        let logout_label = ElementBuilder::new("span")?.text("🚪 Выйти").build();
        {
            let ctx = ctx.clone();
            menu.add_item(logout_label, move || {
                log::info!("👋 Logout");
                ctx.ui.reset();
                ctx.store.set_user(None);
                ctx.navigate(Route::Login);
            })?;
        }
        append_child(&actions, menu.root())?;
    }

    append_child(&topbar, &actions)?;
    Ok(topbar)
}
