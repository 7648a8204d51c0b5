// ============================================================================
// INSIGHTS - Analítica del curso: temas, riesgo, lagunas de conocimiento
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{Insight, InsightKind};
use crate::services::api;
use crate::views::ui;

/// La analítica se carga para el curso actual del Store (caché de
/// conveniencia); sin curso seleccionado se usa el primero de la demo.
fn insights_course_id(ctx: &AppContext) -> String {
    ctx.store
        .current_course()
        .map(|c| c.id)
        .unwrap_or_else(|| "1".to_string())
}

fn ensure_insights(ctx: &AppContext) {
    let course_id = insights_course_id(ctx);
    let already_loaded = ctx
        .ui
        .insights_for
        .borrow()
        .as_deref()
        .map(|id| id == course_id)
        .unwrap_or(false);
    if already_loaded || *ctx.ui.insights_loading.borrow() {
        return;
    }

    *ctx.ui.insights_loading.borrow_mut() = true;
    *ctx.ui.insights.borrow_mut() = None;

    let ui_state = ctx.ui.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_insights(&course_id).await {
            Ok(data) => {
                log::info!("📈 Insights cargados: {} (curso {})", data.len(), course_id);
                *ui_state.insights.borrow_mut() = Some(data);
            }
            Err(e) => {
                log::error!("❌ Error cargando insights: {}", e);
                *ui_state.insights.borrow_mut() = Some(Vec::new());
            }
        }
        *ui_state.insights_for.borrow_mut() = Some(course_id);
        *ui_state.insights_loading.borrow_mut() = false;
        crate::rerender_app();
    });
}

fn find_kind<'a>(insights: &'a [Insight], kind: InsightKind) -> Option<&'a Insight> {
    insights.iter().find(|i| i.kind == kind)
}

pub fn render_insights(ctx: &AppContext) -> Result<Element, JsValue> {
    ensure_insights(ctx);

    let insights_ref = ctx.ui.insights.borrow();
    let insights = match insights_ref.as_ref() {
        Some(list) => list,
        None => return ui::loading_page(),
    };

    let page = ui::page("insights")?;
    append_child(
        &page,
        &ui::page_header("Аналитика", "Анализ успеваемости студентов")?,
    )?;

    if insights.is_empty() {
        append_child(&page, &ui::empty_card("Нет данных по этому курсу")?)?;
        return Ok(page);
    }

    // Освоение тем
    if let Some(mastery) = find_kind(insights, InsightKind::TopicMastery) {
        let (card, content) = ui::card(Some(&mastery.title), Some(&mastery.description))?;
        for topic in &mastery.data.topics {
            let row = ElementBuilder::new("div")?.class("mastery-row").build();
            let label_row = ElementBuilder::new("div")?.class("mastery-label-row").build();
            let label = ElementBuilder::new("span")?.text(&topic.topic).build();
            let value = ElementBuilder::new("span")?
                .class("mastery-value")
                .text(&format!("{}% • {} студентов", topic.mastery, topic.student_count))
                .build();
            append_child(&label_row, &label)?;
            append_child(&label_row, &value)?;
            append_child(&row, &label_row)?;
            append_child(&row, &ui::progress_bar(topic.mastery)?)?;
            append_child(&content, &row)?;
        }
        append_child(&page, &card)?;
    }

    let columns = ElementBuilder::new("div")?.class("two-columns").build();

    // Студенты в зоне риска
    if let Some(at_risk) = find_kind(insights, InsightKind::AtRisk) {
        let (card, content) = ui::card(Some(&at_risk.title), Some(&at_risk.description))?;
        for student in &at_risk.data.at_risk_students {
            let row = ElementBuilder::new("div")?.class("risk-row").build();
            let header = ElementBuilder::new("div")?.class("risk-header").build();
            let name = ElementBuilder::new("p")?
                .class("student-name")
                .text(&student.student_name)
                .build();
            append_child(&header, &name)?;
            append_child(
                &header,
                &ui::badge(
                    &format!("риск {:.0}%", (1.0 - student.risk_score) * 100.0),
                    "destructive",
                )?,
            )?;
            append_child(&row, &header)?;
            for issue in &student.issues {
                let issue_el = ElementBuilder::new("p")?
                    .class("list-row-meta")
                    .text(&format!("• {}", issue))
                    .build();
                append_child(&row, &issue_el)?;
            }
            append_child(&content, &row)?;
        }
        append_child(&columns, &card)?;
    }

    // Частые пробелы
    if let Some(gaps) = find_kind(insights, InsightKind::GapAnalysis) {
        let (card, content) = ui::card(Some(&gaps.title), Some(&gaps.description))?;
        for gap in &gaps.data.common_gaps {
            let row = ElementBuilder::new("div")?.class("list-row").build();
            let info = ElementBuilder::new("div")?.build();
            let topic = ElementBuilder::new("p")?.class("student-name").text(&gap.topic).build();
            let meta = ElementBuilder::new("p")?
                .class("list-row-meta")
                .text(&format!("{} студентов затронуто", gap.affected_students))
                .build();
            append_child(&info, &topic)?;
            append_child(&info, &meta)?;
            append_child(&row, &info)?;
            append_child(&row, &ui::badge(&format!("×{}", gap.frequency), "secondary")?)?;
            append_child(&content, &row)?;
        }
        append_child(&columns, &card)?;
    }

    append_child(&page, &columns)?;

    // Рекомендации
    let recommendations: Vec<&String> = insights
        .iter()
        .flat_map(|i| i.recommendations.iter())
        .collect();
    if !recommendations.is_empty() {
        let (card, content) = ui::card(Some("Рекомендации"), None)?;
        for recommendation in recommendations {
            let item = ElementBuilder::new("p")?
                .class("recommendation")
                .text(&format!("💡 {}", recommendation))
                .build();
            append_child(&content, &item)?;
        }
        append_child(&page, &card)?;
    }

    Ok(page)
}
