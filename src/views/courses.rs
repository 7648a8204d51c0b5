// ============================================================================
// COURSES - Listado de cursos
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::services::api;
use crate::views::ui;

/// Lanza la carga de cursos si todavía no están en memoria.
pub fn ensure_courses(ctx: &AppContext) {
    if ctx.ui.courses.borrow().is_some() || *ctx.ui.courses_loading.borrow() {
        return;
    }
    *ctx.ui.courses_loading.borrow_mut() = true;

    let ui_state = ctx.ui.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_courses().await {
            Ok(data) => {
                log::info!("📚 Cursos cargados: {}", data.len());
                *ui_state.courses.borrow_mut() = Some(data);
            }
            Err(e) => {
                log::error!("❌ Error cargando cursos: {}", e);
                *ui_state.courses.borrow_mut() = Some(Vec::new());
            }
        }
        *ui_state.courses_loading.borrow_mut() = false;
        crate::rerender_app();
    });
}

pub fn render_courses(ctx: &AppContext) -> Result<Element, JsValue> {
    ensure_courses(ctx);

    let courses_ref = ctx.ui.courses.borrow();
    let course_list = match courses_ref.as_ref() {
        Some(list) => list,
        None => return ui::loading_page(),
    };

    let page = ui::page("courses")?;
    append_child(&page, &ui::page_header("Курсы", "Управление вашими курсами")?)?;

    if course_list.is_empty() {
        append_child(&page, &ui::empty_card("Нет курсов")?)?;
        return Ok(page);
    }

    let grid = ElementBuilder::new("div")?.class("course-grid").build();
    for course in course_list.iter() {
        let (card, content) = ui::card(Some(&course.name), course.description.as_deref())?;
        crate::dom::add_class(&card, "course-card")?;

        let meta = ElementBuilder::new("div")?.class("course-meta").build();
        append_child(&meta, &ui::badge(&course.code, "secondary")?)?;
        let semester = ElementBuilder::new("span")?
            .class("course-semester")
            .text(&format!("{} {}", course.semester, course.year))
            .build();
        append_child(&meta, &semester)?;
        append_child(&content, &meta)?;

        let counts = ElementBuilder::new("p")?
            .class("course-counts")
            .text(&format!(
                "👥 {} студентов • 📝 {} заданий",
                course.student_count, course.assignment_count
            ))
            .build();
        append_child(&content, &counts)?;

        let ctx_clone = ctx.clone();
        let course_clone = course.clone();
        on_click(&card, move |_| {
            // Curso seleccionado: caché de conveniencia en el Store
            ctx_clone.store.set_current_course(Some(course_clone.clone()));
            ctx_clone.navigate(Route::Course(course_clone.id.clone()));
        })?;
        append_child(&grid, &card)?;
    }
    append_child(&page, &grid)?;

    Ok(page)
}
