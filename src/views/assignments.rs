// ============================================================================
// ASSIGNMENTS - Listado con búsqueda y filtro de estado
// ============================================================================
// El filtrado re-renderiza solo el contenedor de resultados: así el input
// de búsqueda no pierde el foco y el Select (controlled) sobrevive.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, input_value, on_click, on_input, set_inner_html, ElementBuilder};
use crate::models::Assignment;
use crate::router::Route;
use crate::services::api;
use crate::views::ui;
use crate::widgets::{Select, SelectOption, SelectState};

/// Lanza la carga de tareas si todavía no están en memoria.
pub fn ensure_assignments(ctx: &AppContext) {
    if ctx.ui.assignments.borrow().is_some() || *ctx.ui.assignments_loading.borrow() {
        return;
    }
    *ctx.ui.assignments_loading.borrow_mut() = true;

    let ui_state = ctx.ui.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_assignments().await {
            Ok(data) => {
                log::info!("📝 Tareas cargadas: {}", data.len());
                *ui_state.assignments.borrow_mut() = Some(data);
            }
            Err(e) => {
                log::error!("❌ Error cargando tareas: {}", e);
                *ui_state.assignments.borrow_mut() = Some(Vec::new());
            }
        }
        *ui_state.assignments_loading.borrow_mut() = false;
        crate::rerender_app();
    });
}

fn filter_assignments(list: &[Assignment], search: &str, status: &str) -> Vec<Assignment> {
    let needle = search.trim().to_lowercase();
    list.iter()
        .filter(|a| {
            let matches_search = needle.is_empty()
                || a.title.to_lowercase().contains(&needle)
                || a.description
                    .as_ref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false);
            let matches_status = status == "all" || a.status.as_str() == status;
            matches_search && matches_status
        })
        .cloned()
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "Все статусы"),
        SelectOption::new("draft", "Черновик"),
        SelectOption::new("published", "Опубликовано"),
        SelectOption::new("closed", "Закрыто"),
    ]
}

pub fn render_assignments(ctx: &AppContext) -> Result<Element, JsValue> {
    ensure_assignments(ctx);

    if ctx.ui.assignments.borrow().is_none() {
        return ui::loading_page();
    }

    let page = ui::page("assignments")?;
    append_child(&page, &ui::page_header("Задания", "Все ваши задания")?)?;

    let results = ElementBuilder::new("div")?.class("assignment-list").build();

    let refresh: Rc<dyn Fn()> = {
        let ctx = ctx.clone();
        let results = results.clone();
        Rc::new(move || {
            if let Err(e) = fill_assignment_list(&ctx, &results) {
                log::error!("❌ Error renderizando lista de tareas: {:?}", e);
            }
        })
    };

    // Fila de filtros: búsqueda + estado
    let filters = ElementBuilder::new("div")?.class("filter-row").build();

    let search_input = ElementBuilder::new("input")?
        .class("input")
        .attr("type", "search")?
        .attr("placeholder", "Поиск заданий...")?
        .attr("value", &ctx.ui.search.borrow())?
        .build();
    {
        let ui_state = ctx.ui.clone();
        let refresh = Rc::clone(&refresh);
        on_input(&search_input, move |e| {
            if let Some(value) = input_value(&e) {
                *ui_state.search.borrow_mut() = value;
                refresh();
            }
        })?;
    }
    append_child(&filters, &search_input)?;

    // Select controlled: el valor vive en el estado de la página
    let status_state = {
        let reads = ctx.ui.status_filter.clone();
        let writes = ctx.ui.status_filter.clone();
        let refresh = Rc::clone(&refresh);
        SelectState::controlled(
            Rc::new(move || reads.borrow().clone()),
            Rc::new(move |value| {
                *writes.borrow_mut() = value;
                refresh();
            }),
        )
    };
    let status_select = Select::new(status_options(), "Статус", status_state)?;
    append_child(&filters, status_select.root())?;
    append_child(&page, &filters)?;

    refresh();
    append_child(&page, &results)?;

    Ok(page)
}

fn fill_assignment_list(ctx: &AppContext, container: &Element) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let assignments_ref = ctx.ui.assignments.borrow();
    let all = match assignments_ref.as_ref() {
        Some(list) => list,
        None => return Ok(()),
    };
    let filtered = filter_assignments(
        all,
        &ctx.ui.search.borrow(),
        &ctx.ui.status_filter.borrow(),
    );

    if filtered.is_empty() {
        append_child(container, &ui::empty_card("Задания не найдены")?)?;
        return Ok(());
    }

    for assignment in filtered {
        let (card, content) = ui::card(None, None)?;
        crate::dom::add_class(&card, "assignment-card")?;

        let title_row = ElementBuilder::new("div")?.class("assignment-title-row").build();
        let title = ElementBuilder::new("h3")?.text(&assignment.title).build();
        append_child(&title_row, &title)?;
        append_child(&title_row, &ui::badge(assignment.kind.label(), "secondary")?)?;
        let status_variant = match assignment.status {
            crate::models::AssignmentStatus::Published => "default",
            _ => "outline",
        };
        append_child(&title_row, &ui::badge(assignment.status.label(), status_variant)?)?;
        append_child(&content, &title_row)?;

        if let Some(description) = &assignment.description {
            let p = ElementBuilder::new("p")?
                .class("assignment-description")
                .text(description)
                .build();
            append_child(&content, &p)?;
        }

        let meta = ElementBuilder::new("p")?
            .class("assignment-meta")
            .text(&format!(
                "Срок: {} • Проверено: {}/{}",
                crate::utils::format_date(&assignment.due_date),
                assignment.graded_submissions,
                assignment.total_submissions
            ))
            .build();
        append_child(&content, &meta)?;

        let ctx_clone = ctx.clone();
        let id = assignment.id.clone();
        on_click(&card, move |_| {
            ctx_clone.navigate(Route::Review(id.clone()));
        })?;
        append_child(container, &card)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_data;

    #[test]
    fn empty_filters_keep_everything() {
        let all = mock_data::assignments();
        assert_eq!(filter_assignments(&all, "", "all").len(), all.len());
    }

    #[test]
    fn search_matches_title_and_description_case_insensitive() {
        let all = mock_data::assignments();
        let by_title = filter_assignments(&all, "ЛИНЕЙНАЯ", "all");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1");

        let by_description = filter_assignments(&all, "разбором решений", "all");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "4");
    }

    #[test]
    fn status_filter_composes_with_search() {
        let all = mock_data::assignments();
        let drafts = filter_assignments(&all, "", "draft");
        assert!(drafts.iter().all(|a| a.status.as_str() == "draft"));
        assert_eq!(drafts.len(), 1);

        let none = filter_assignments(&all, "нейронных", "draft");
        assert!(none.is_empty());
    }
}
