// ============================================================================
// COURSE DETAIL - Estudiantes y tareas de un curso
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::services::api;
use crate::views::ui;

fn ensure_course_detail(ctx: &AppContext, course_id: &str) {
    let already_loaded = ctx
        .ui
        .course_detail_for
        .borrow()
        .as_deref()
        .map(|id| id == course_id)
        .unwrap_or(false);
    if already_loaded || *ctx.ui.course_detail_loading.borrow() {
        return;
    }

    *ctx.ui.course_detail_loading.borrow_mut() = true;
    *ctx.ui.course_students.borrow_mut() = None;
    *ctx.ui.course_assignments.borrow_mut() = None;

    let ui_state = ctx.ui.clone();
    let store = ctx.store.clone();
    let course_id = course_id.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_course(&course_id).await {
            Ok(course) => {
                // Mantener la caché del Store alineada con la ruta visitada
                store.set_current_course(Some(course));
            }
            Err(e) => {
                log::warn!("⚠️ Curso {} no encontrado: {}", course_id, e);
                store.set_current_course(None);
            }
        }
        if let Ok(students) = api::get_students(&course_id).await {
            *ui_state.course_students.borrow_mut() = Some(students);
        }
        if let Ok(assignments) = api::get_course_assignments(&course_id).await {
            *ui_state.course_assignments.borrow_mut() = Some(assignments);
        }
        *ui_state.course_detail_for.borrow_mut() = Some(course_id);
        *ui_state.course_detail_loading.borrow_mut() = false;
        crate::rerender_app();
    });
}

pub fn render_course_detail(ctx: &AppContext, course_id: &str) -> Result<Element, JsValue> {
    ensure_course_detail(ctx, course_id);

    let loaded = ctx
        .ui
        .course_detail_for
        .borrow()
        .as_deref()
        .map(|id| id == course_id)
        .unwrap_or(false);
    if !loaded {
        return ui::loading_page();
    }

    let page = ui::page("course-detail")?;

    let course = match ctx.store.current_course() {
        Some(course) if course.id == course_id => course,
        _ => {
            append_child(&page, &ui::empty_card("Курс не найден")?)?;
            return Ok(page);
        }
    };

    append_child(
        &page,
        &ui::page_header(&course.name, course.description.as_deref().unwrap_or(""))?,
    )?;

    let meta = ElementBuilder::new("div")?.class("course-meta").build();
    append_child(&meta, &ui::badge(&course.code, "secondary")?)?;
    let semester = ElementBuilder::new("span")?
        .class("course-semester")
        .text(&format!("{} {}", course.semester, course.year))
        .build();
    append_child(&meta, &semester)?;
    append_child(&page, &meta)?;

    let columns = ElementBuilder::new("div")?.class("two-columns").build();

    // Estudiantes
    let (students_card, students_content) = ui::card(
        Some("Студенты"),
        Some(&format!("{} студентов на курсе", course.student_count)),
    )?;
    let students_ref = ctx.ui.course_students.borrow();
    match students_ref.as_deref() {
        Some([]) | None => {
            append_child(
                &students_content,
                &ElementBuilder::new("p")?
                    .class("empty-message")
                    .text("Список студентов пуст")
                    .build(),
            )?;
        }
        Some(students) => {
            for student in students {
                let row = ElementBuilder::new("div")?.class("list-row student-row").build();
                append_child(&row, &ui::avatar(&student.initials())?)?;
                let info = ElementBuilder::new("div")?.build();
                let name = ElementBuilder::new("h3")?.text(&student.name).build();
                let meta = ElementBuilder::new("p")?
                    .class("list-row-meta")
                    .text(&format!("{} • {}", student.student_id, student.email))
                    .build();
                append_child(&info, &name)?;
                append_child(&info, &meta)?;
                append_child(&row, &info)?;
                append_child(&students_content, &row)?;
            }
        }
    }
    append_child(&columns, &students_card)?;

    // Tareas del curso
    let (assignments_card, assignments_content) =
        ui::card(Some("Задания"), Some("Задания этого курса"))?;
    let assignments_ref = ctx.ui.course_assignments.borrow();
    match assignments_ref.as_deref() {
        Some([]) | None => {
            append_child(
                &assignments_content,
                &ElementBuilder::new("p")?
                    .class("empty-message")
                    .text("Заданий пока нет")
                    .build(),
            )?;
        }
        Some(assignments) => {
            for assignment in assignments {
                let row = ElementBuilder::new("div")?.class("list-row").build();
                let info = ElementBuilder::new("div")?.build();
                let title = ElementBuilder::new("h3")?.text(&assignment.title).build();
                let meta = ElementBuilder::new("p")?
                    .class("list-row-meta")
                    .text(&format!(
                        "Срок: {}",
                        crate::utils::format_date(&assignment.due_date)
                    ))
                    .build();
                append_child(&info, &title)?;
                append_child(&info, &meta)?;
                append_child(&row, &info)?;
                append_child(&row, &ui::badge(assignment.status.label(), "outline")?)?;

                let ctx_clone = ctx.clone();
                let id = assignment.id.clone();
                on_click(&row, move |_| {
                    ctx_clone.navigate(Route::Review(id.clone()));
                })?;
                append_child(&assignments_content, &row)?;
            }
        }
    }
    append_child(&columns, &assignments_card)?;

    append_child(&page, &columns)?;
    Ok(page)
}
