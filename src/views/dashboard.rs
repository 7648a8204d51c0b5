// ============================================================================
// DASHBOARD - Resumen de cursos y trabajo pendiente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::{Assignment, Course};
use crate::router::Route;
use crate::views::{assignments, courses, ui};

fn total_students(courses: &[Course]) -> u32 {
    courses.iter().map(|c| c.student_count).sum()
}

fn pending_grading_count(assignments: &[Assignment]) -> usize {
    assignments.iter().filter(|a| a.pending_grading() > 0).count()
}

pub fn render_dashboard(ctx: &AppContext) -> Result<Element, JsValue> {
    courses::ensure_courses(ctx);
    assignments::ensure_assignments(ctx);

    let courses_ref = ctx.ui.courses.borrow();
    let assignments_ref = ctx.ui.assignments.borrow();
    let (course_list, assignment_list) = match (courses_ref.as_ref(), assignments_ref.as_ref()) {
        (Some(c), Some(a)) => (c, a),
        _ => return ui::loading_page(),
    };

    let page = ui::page("dashboard")?;
    append_child(
        &page,
        &ui::page_header("Dashboard", "Обзор ваших курсов и заданий")?,
    )?;

    // Tarjetas de métricas
    let stats = ElementBuilder::new("div")?.class("stat-grid").build();
    append_child(
        &stats,
        &ui::stat_card("Курсы", "📚", &course_list.len().to_string(), "Активных курсов")?,
    )?;
    append_child(
        &stats,
        &ui::stat_card("Задания", "📝", &assignment_list.len().to_string(), "Всего заданий")?,
    )?;
    append_child(
        &stats,
        &ui::stat_card(
            "Студенты",
            "👥",
            &total_students(course_list).to_string(),
            "Всего студентов",
        )?,
    )?;
    append_child(
        &stats,
        &ui::stat_card(
            "На проверке",
            "📈",
            &pending_grading_count(assignment_list).to_string(),
            "Требуют проверки",
        )?,
    )?;
    append_child(&page, &stats)?;

    let columns = ElementBuilder::new("div")?.class("two-columns").build();

    // Cursos recientes
    let (courses_card, courses_content) =
        ui::card(Some("Недавние курсы"), Some("Ваши активные курсы"))?;
    for course in course_list.iter().take(3) {
        let row = ElementBuilder::new("div")?.class("list-row").build();
        let info = ElementBuilder::new("div")?.build();
        let name = ElementBuilder::new("h3")?.text(&course.name).build();
        let meta = ElementBuilder::new("p")?
            .class("list-row-meta")
            .text(&format!("{} • {} студентов", course.code, course.student_count))
            .build();
        append_child(&info, &name)?;
        append_child(&info, &meta)?;
        let arrow = ElementBuilder::new("span")?.class("list-row-arrow").text("→").build();
        append_child(&row, &info)?;
        append_child(&row, &arrow)?;

        let ctx_clone = ctx.clone();
        let course_clone = course.clone();
        on_click(&row, move |_| {
            ctx_clone.store.set_current_course(Some(course_clone.clone()));
            ctx_clone.navigate(Route::Course(course_clone.id.clone()));
        })?;
        append_child(&courses_content, &row)?;
    }
    append_child(&columns, &courses_card)?;

    // Tareas con trabajos sin revisar
    let (pending_card, pending_content) =
        ui::card(Some("Задания на проверке"), Some("Требуют вашего внимания"))?;
    for assignment in assignment_list
        .iter()
        .filter(|a| a.pending_grading() > 0)
        .take(3)
    {
        let row = ElementBuilder::new("div")?.class("list-row").build();
        let info = ElementBuilder::new("div")?.build();
        let title = ElementBuilder::new("h3")?.text(&assignment.title).build();
        let meta = ElementBuilder::new("p")?
            .class("list-row-meta")
            .text(&format!("{} на проверке", assignment.pending_grading()))
            .build();
        append_child(&info, &title)?;
        append_child(&info, &meta)?;
        append_child(&row, &info)?;
        append_child(&row, &ui::badge(assignment.kind.label(), "secondary")?)?;

        let ctx_clone = ctx.clone();
        let id = assignment.id.clone();
        on_click(&row, move |_| {
            ctx_clone.navigate(Route::Review(id.clone()));
        })?;
        append_child(&pending_content, &row)?;
    }
    append_child(&columns, &pending_card)?;

    append_child(&page, &columns)?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_data;

    #[test]
    fn student_total_sums_every_course() {
        assert_eq!(total_students(&mock_data::courses()), 45 + 52 + 38);
    }

    #[test]
    fn pending_count_ignores_fully_graded_assignments() {
        let assignments = mock_data::assignments();
        let pending = pending_grading_count(&assignments);
        // "Тест: Основы нейронных сетей" (45/45), el borrador (0/0) y el
        // proyecto cerrado (38/38) no cuentan.
        assert_eq!(pending, 2);
    }
}
