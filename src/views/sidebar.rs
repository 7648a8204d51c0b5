// ============================================================================
// SIDEBAR - Navegación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;

fn nav_items() -> Vec<(Route, &'static str, &'static str)> {
    vec![
        (Route::Dashboard, "Dashboard", "📊"),
        (Route::Courses, "Курсы", "📚"),
        (Route::Assignments, "Задания", "📝"),
        (Route::Insights, "Аналитика", "📈"),
        (Route::Assistant, "AI Ассистент", "💬"),
        (Route::Settings, "Настройки", "⚙️"),
    ]
}

/// Un item queda activo también en sus subrutas (detalle de curso,
/// pantalla de revisión).
fn is_active(current: &Route, item: &Route) -> bool {
    match (current, item) {
        (Route::Course(_), Route::Courses) => true,
        (Route::Review(_), Route::Assignments) => true,
        _ => current == item,
    }
}

pub fn render_sidebar(ctx: &AppContext) -> Result<Element, JsValue> {
    let sidebar = ElementBuilder::new("aside")?.class("sidebar").build();

    let brand = ElementBuilder::new("div")?.class("brand").build();
    let brand_icon = ElementBuilder::new("span")?.class("brand-icon").text("🧠").build();
    let brand_name = ElementBuilder::new("span")?
        .class("brand-name")
        .text(&crate::config::CONFIG.app_title)
        .build();
    append_child(&brand, &brand_icon)?;
    append_child(&brand, &brand_name)?;
    append_child(&sidebar, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();
    let current = ctx.route.borrow().clone();

    for (route, label, icon) in nav_items() {
        let class = if is_active(&current, &route) {
            "nav-item active"
        } else {
            "nav-item"
        };
        let item = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .build();
        let icon_el = ElementBuilder::new("span")?.class("nav-icon").text(icon).build();
        let label_el = ElementBuilder::new("span")?.text(label).build();
        append_child(&item, &icon_el)?;
        append_child(&item, &label_el)?;

        let ctx = ctx.clone();
        on_click(&item, move |_| {
            ctx.navigate(route.clone());
        })?;
        append_child(&nav, &item)?;
    }
    append_child(&sidebar, &nav)?;

    Ok(sidebar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_keep_their_section_active() {
        assert!(is_active(&Route::Course("2".into()), &Route::Courses));
        assert!(is_active(&Route::Review("1".into()), &Route::Assignments));
        assert!(is_active(&Route::Insights, &Route::Insights));
        assert!(!is_active(&Route::Course("2".into()), &Route::Assignments));
        assert!(!is_active(&Route::Dashboard, &Route::Settings));
    }
}
