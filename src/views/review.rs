// ============================================================================
// REVIEW - Pantalla de revisión de entregas de una tarea
// ============================================================================

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, input_value, on_click, on_input, ElementBuilder};
use crate::models::{Submission, SubmissionStatus};
use crate::services::api;
use crate::views::ui;

fn ensure_review(ctx: &AppContext, assignment_id: &str) {
    let already_loaded = ctx
        .ui
        .review_loaded_for
        .borrow()
        .as_deref()
        .map(|id| id == assignment_id)
        .unwrap_or(false);
    if already_loaded || *ctx.ui.review_loading.borrow() {
        return;
    }

    *ctx.ui.review_loading.borrow_mut() = true;
    *ctx.ui.review_assignment.borrow_mut() = None;
    ctx.ui.review_submissions.borrow_mut().clear();
    *ctx.ui.review_selected.borrow_mut() = None;
    *ctx.ui.feedback_input.borrow_mut() = String::new();

    let ui_state = ctx.ui.clone();
    let assignment_id = assignment_id.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_assignment(&assignment_id).await {
            Ok(assignment) => {
                *ui_state.review_assignment.borrow_mut() = Some(assignment);
            }
            Err(e) => {
                log::warn!("⚠️ Tarea {} no encontrada: {}", assignment_id, e);
            }
        }
        match api::get_submissions(&assignment_id).await {
            Ok(submissions) => {
                log::info!("📥 Entregas cargadas: {}", submissions.len());
                if let Some(first) = submissions.first() {
                    *ui_state.review_selected.borrow_mut() = Some(0);
                    *ui_state.feedback_input.borrow_mut() =
                        first.feedback.clone().unwrap_or_default();
                }
                *ui_state.review_submissions.borrow_mut() = submissions;
            }
            Err(e) => {
                log::error!("❌ Error cargando entregas: {}", e);
            }
        }
        *ui_state.review_loaded_for.borrow_mut() = Some(assignment_id);
        *ui_state.review_loading.borrow_mut() = false;
        crate::rerender_app();
    });
}

pub fn render_review(ctx: &AppContext, assignment_id: &str) -> Result<Element, JsValue> {
    ensure_review(ctx, assignment_id);

    let loaded = ctx
        .ui
        .review_loaded_for
        .borrow()
        .as_deref()
        .map(|id| id == assignment_id)
        .unwrap_or(false);
    if !loaded {
        return ui::loading_page();
    }

    let assignment = match ctx.ui.review_assignment.borrow().clone() {
        Some(assignment) => assignment,
        None => {
            let page = ui::page("review")?;
            append_child(&page, &ui::empty_card("Задание не найдено")?)?;
            return Ok(page);
        }
    };

    let layout = ElementBuilder::new("div")?.class("review-layout").build();

    // Lista de estudiantes
    let sidebar = ElementBuilder::new("aside")?.class("review-sidebar").build();
    let submissions = ctx.ui.review_submissions.borrow().clone();
    let selected = *ctx.ui.review_selected.borrow();

    let sidebar_header = ElementBuilder::new("div")?.class("review-sidebar-header").build();
    let h2 = ElementBuilder::new("h2")?.text("Студенты").build();
    let count = ElementBuilder::new("p")?
        .class("list-row-meta")
        .text(&format!("{} работ", submissions.len()))
        .build();
    append_child(&sidebar_header, &h2)?;
    append_child(&sidebar_header, &count)?;
    append_child(&sidebar, &sidebar_header)?;

    for (index, submission) in submissions.iter().enumerate() {
        let class = if selected == Some(index) {
            "student-item active"
        } else {
            "student-item"
        };
        let item = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .build();
        append_child(&item, &ui::avatar(&submission.student.initials())?)?;
        let info = ElementBuilder::new("div")?.build();
        let name = ElementBuilder::new("p")?
            .class("student-name")
            .text(&submission.student.name)
            .build();
        let status = ElementBuilder::new("p")?
            .class("list-row-meta")
            .text(submission.status.label())
            .build();
        append_child(&info, &name)?;
        append_child(&info, &status)?;
        append_child(&item, &info)?;

        let ctx_clone = ctx.clone();
        let feedback = submission.feedback.clone().unwrap_or_default();
        on_click(&item, move |_| {
            *ctx_clone.ui.review_selected.borrow_mut() = Some(index);
            *ctx_clone.ui.feedback_input.borrow_mut() = feedback.clone();
            crate::rerender_app();
        })?;
        append_child(&sidebar, &item)?;
    }
    append_child(&layout, &sidebar)?;

    // Contenido de la revisión
    let main = ElementBuilder::new("div")?.class("review-main").build();

    let (assignment_card, assignment_content) = ui::card(Some(&assignment.title), None)?;
    let badges = ElementBuilder::new("div")?.class("assignment-title-row").build();
    append_child(&badges, &ui::badge(assignment.kind.label(), "secondary")?)?;
    append_child(&badges, &ui::badge(assignment.status.label(), "outline")?)?;
    append_child(&assignment_content, &badges)?;
    if let Some(description) = &assignment.description {
        let p = ElementBuilder::new("p")?
            .class("assignment-description")
            .text(description)
            .build();
        append_child(&assignment_content, &p)?;
    }
    let due = ElementBuilder::new("p")?
        .class("assignment-meta")
        .text(&format!("Срок: {}", crate::utils::format_date(&assignment.due_date)))
        .build();
    append_child(&assignment_content, &due)?;
    append_child(&main, &assignment_card)?;

    match selected {
        Some(index) if index < submissions.len() => {
            let submission = &submissions[index];
            append_child(&main, &render_submission(submission)?)?;
            append_child(&main, &render_feedback_editor(ctx, submission, index)?)?;
        }
        _ => {
            append_child(&main, &ui::empty_card("Нет работ для проверки")?)?;
        }
    }

    append_child(&layout, &main)?;

    let page = ui::page("review")?;
    append_child(&page, &layout)?;
    Ok(page)
}

fn render_submission(submission: &Submission) -> Result<Element, JsValue> {
    let (card, content) = ui::card(
        Some("Работа студента"),
        Some(&format!(
            "Сдано: {}",
            crate::utils::format_date_time(&submission.submitted_at)
        )),
    )?;

    if let Some(text) = &submission.content {
        let p = ElementBuilder::new("p")?.class("submission-content").text(text).build();
        append_child(&content, &p)?;
    }

    if !submission.files.is_empty() {
        let files = ElementBuilder::new("div")?.class("submission-files").build();
        for file in &submission.files {
            append_child(&files, &ui::badge(&format!("📎 {}", file), "outline")?)?;
        }
        append_child(&content, &files)?;
    }

    if let Some(score) = submission.score {
        let score_el = ElementBuilder::new("p")?
            .class("submission-score")
            .text(&format!("Оценка: {}/{}", score, submission.max_score))
            .build();
        append_child(&content, &score_el)?;
    }

    // Rúbrica, si la entrega ya tiene desglose
    if !submission.rubric.is_empty() {
        let rubric = ElementBuilder::new("div")?.class("rubric").build();
        for item in &submission.rubric {
            let row = ElementBuilder::new("div")?.class("rubric-row").build();
            let info = ElementBuilder::new("div")?.build();
            let criterion = ElementBuilder::new("p")?
                .class("rubric-criterion")
                .text(&item.criterion)
                .build();
            let description = ElementBuilder::new("p")?
                .class("list-row-meta")
                .text(&item.description)
                .build();
            append_child(&info, &criterion)?;
            append_child(&info, &description)?;
            if let Some(note) = &item.feedback {
                let note_el = ElementBuilder::new("p")?
                    .class("rubric-note")
                    .text(&format!("💬 {}", note))
                    .build();
                append_child(&info, &note_el)?;
            }
            append_child(&row, &info)?;

            let points = match item.earned_points {
                Some(earned) => format!("{}/{}", earned, item.points),
                None => format!("—/{}", item.points),
            };
            let points_el = ElementBuilder::new("span")?.class("rubric-points").text(&points).build();
            append_child(&row, &points_el)?;
            append_child(&rubric, &row)?;
        }
        append_child(&content, &rubric)?;
    }

    Ok(card)
}

fn render_feedback_editor(
    ctx: &AppContext,
    submission: &Submission,
    index: usize,
) -> Result<Element, JsValue> {
    let (card, content) = ui::card(Some("Фидбек"), None)?;

    let textarea = ElementBuilder::new("textarea")?
        .class("textarea")
        .attr("rows", "5")?
        .attr("placeholder", "Комментарий для студента...")?
        .build();
    if let Some(area) = textarea.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(&ctx.ui.feedback_input.borrow());
    }
    {
        let ui_state = ctx.ui.clone();
        on_input(&textarea, move |e| {
            if let Some(value) = input_value(&e) {
                *ui_state.feedback_input.borrow_mut() = value;
            }
        })?;
    }
    append_child(&content, &textarea)?;

    let actions = ElementBuilder::new("div")?.class("review-actions").build();

    // Generación de feedback con la "IA" de demo
    let generating = *ctx.ui.generating_feedback.borrow();
    let generate_btn = ui::button(
        if generating { "✨ Генерация..." } else { "✨ Сгенерировать фидбек" },
        "button secondary",
    )?;
    if generating {
        generate_btn.set_attribute("disabled", "disabled")?;
    }
    {
        let ctx_clone = ctx.clone();
        let submission_id = submission.id.clone();
        on_click(&generate_btn, move |_| {
            if *ctx_clone.ui.generating_feedback.borrow() {
                return;
            }
            *ctx_clone.ui.generating_feedback.borrow_mut() = true;
            crate::rerender_app();

            let ctx_async = ctx_clone.clone();
            let submission_id = submission_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::generate_feedback(&submission_id).await {
                    Ok(text) => {
                        *ctx_async.ui.feedback_input.borrow_mut() = text;
                    }
                    Err(e) => {
                        log::error!("❌ Error generando feedback: {}", e);
                    }
                }
                *ctx_async.ui.generating_feedback.borrow_mut() = false;
                crate::rerender_app();
            });
        })?;
    }
    append_child(&actions, &generate_btn)?;

    let approve_btn = ui::button("✅ Одобрить", "button primary")?;
    {
        let ctx_clone = ctx.clone();
        let submission_id = submission.id.clone();
        on_click(&approve_btn, move |_| {
            let ctx_async = ctx_clone.clone();
            let submission_id = submission_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::approve_submission(&submission_id).await {
                    Ok(()) => {
                        if let Some(entry) =
                            ctx_async.ui.review_submissions.borrow_mut().get_mut(index)
                        {
                            entry.status = SubmissionStatus::Approved;
                        }
                        crate::rerender_app();
                    }
                    Err(e) => log::error!("❌ Error aprobando entrega: {}", e),
                }
            });
        })?;
    }
    append_child(&actions, &approve_btn)?;

    let revision_btn = ui::button("🔄 Запросить доработку", "button outline")?;
    {
        let ctx_clone = ctx.clone();
        let submission_id = submission.id.clone();
        on_click(&revision_btn, move |_| {
            let feedback = ctx_clone.ui.feedback_input.borrow().clone();
            if feedback.trim().is_empty() {
                log::warn!("⚠️ La solicitud de revisión necesita feedback");
                return;
            }
            let ctx_async = ctx_clone.clone();
            let submission_id = submission_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::request_revision(&submission_id, &feedback).await {
                    Ok(()) => {
                        if let Some(entry) =
                            ctx_async.ui.review_submissions.borrow_mut().get_mut(index)
                        {
                            entry.status = SubmissionStatus::RevisionRequested;
                            entry.feedback = Some(feedback.clone());
                        }
                        crate::rerender_app();
                    }
                    Err(e) => log::error!("❌ Error solicitando revisión: {}", e),
                }
            });
        })?;
    }
    append_child(&actions, &revision_btn)?;

    append_child(&content, &actions)?;
    Ok(card)
}
