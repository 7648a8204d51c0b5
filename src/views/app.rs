// ============================================================================
// APP VIEW - Gate de sesión + shell autenticado (sidebar + topbar + página)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::views::{
    assignments, assistant, course_detail, courses, dashboard, insights, login, review,
    settings, sidebar, topbar,
};

pub fn render_app(ctx: &AppContext) -> Result<Element, JsValue> {
    let route = ctx.route.borrow().clone();

    // Gate: las vistas autenticadas no se renderizan sin usuario
    if ctx.store.user().is_none() {
        if route != Route::Login {
            log::info!("🔒 Sin sesión activa, redirigiendo a login");
            ctx.navigate(Route::Login);
        }
        return login::render_login(ctx);
    }

    // Usuario ya autenticado: /login deja de tener sentido
    if route == Route::Login {
        ctx.navigate(Route::Dashboard);
    }

    let shell = ElementBuilder::new("div")?.class("app-shell").build();
    append_child(&shell, &sidebar::render_sidebar(ctx)?)?;

    let main_column = ElementBuilder::new("div")?.class("app-main").build();
    append_child(&main_column, &topbar::render_topbar(ctx)?)?;

    let content = ElementBuilder::new("main")?.class("app-content").build();
    let page = match route {
        Route::Login | Route::Dashboard => dashboard::render_dashboard(ctx)?,
        Route::Courses => courses::render_courses(ctx)?,
        Route::Course(id) => course_detail::render_course_detail(ctx, &id)?,
        Route::Assignments => assignments::render_assignments(ctx)?,
        Route::Review(id) => review::render_review(ctx, &id)?,
        Route::Insights => insights::render_insights(ctx)?,
        Route::Assistant => assistant::render_assistant(ctx)?,
        Route::Settings => settings::render_settings(ctx)?,
    };
    append_child(&content, &page)?;
    append_child(&main_column, &content)?;
    append_child(&shell, &main_column)?;

    Ok(shell)
}
