// ============================================================================
// SETTINGS - Perfil, notificaciones y apariencia
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, create_element, on_change, on_click, set_attribute, ElementBuilder};
use crate::store::Theme;
use crate::views::ui;
use crate::widgets::{Select, SelectOption, SelectState};

pub fn render_settings(ctx: &AppContext) -> Result<Element, JsValue> {
    let page = ui::page("settings")?;
    append_child(
        &page,
        &ui::page_header("Настройки", "Управление профилем и настройками приложения")?,
    )?;

    let grid = ElementBuilder::new("div")?.class("two-columns settings-grid").build();

    if let Some(user) = ctx.store.user() {
        // Perfil
        let (profile_card, profile_content) =
            ui::card(Some("Профиль"), Some("Информация о вашем аккаунте"))?;

        let identity = ElementBuilder::new("div")?.class("profile-identity").build();
        let avatar = ui::avatar(&user.initials())?;
        crate::dom::add_class(&avatar, "avatar-lg")?;
        append_child(&identity, &avatar)?;
        let info = ElementBuilder::new("div")?.build();
        let name = ElementBuilder::new("p")?.class("student-name").text(&user.name).build();
        let email = ElementBuilder::new("p")?.class("list-row-meta").text(&user.email).build();
        append_child(&info, &name)?;
        append_child(&info, &email)?;
        append_child(&identity, &info)?;
        append_child(&profile_content, &identity)?;

        let name_field = ElementBuilder::new("div")?.class("form-field").build();
        let name_label = ElementBuilder::new("label")?.class("form-label").text("Имя").build();
        let name_input = ElementBuilder::new("input")?
            .class("input")
            .attr("type", "text")?
            .attr("value", &user.name)?
            .build();
        append_child(&name_field, &name_label)?;
        append_child(&name_field, &name_input)?;
        append_child(&profile_content, &name_field)?;

        let email_field = ElementBuilder::new("div")?.class("form-field").build();
        let email_label = ElementBuilder::new("label")?.class("form-label").text("Email").build();
        let email_input = ElementBuilder::new("input")?
            .class("input")
            .attr("type", "email")?
            .attr("value", &user.email)?
            .attr("disabled", "disabled")?
            .build();
        append_child(&email_field, &email_label)?;
        append_child(&email_field, &email_input)?;
        append_child(&profile_content, &email_field)?;

        let save_profile = ui::button("Сохранить изменения", "button primary")?;
        on_click(&save_profile, move |_| {
            log::info!("💾 Perfil guardado (demo, sin backend)");
        })?;
        append_child(&profile_content, &save_profile)?;
        append_child(&grid, &profile_card)?;
    }

    // Notificaciones
    let (notify_card, notify_content) =
        ui::card(Some("Уведомления"), Some("Настройки уведомлений"))?;
    let toggles = [
        ("Email уведомления", "Получать уведомления на email"),
        ("Новые задания", "Уведомления о новых заданиях"),
        ("Проверка работ", "Уведомления о новых работах на проверку"),
    ];
    for (label, description) in toggles {
        append_child(&notify_content, &toggle_section(label, description)?)?;
    }

    // Frecuencia del digest: select uncontrolled, se lee al guardar
    let digest_row = ElementBuilder::new("div")?.class("settings-row").build();
    let digest_label = ElementBuilder::new("div")?.build();
    let digest_title = ElementBuilder::new("p")?
        .class("settings-row-title")
        .text("Частота дайджеста")
        .build();
    let digest_caption = ElementBuilder::new("p")?
        .class("list-row-meta")
        .text("Сводка по курсам на почту")
        .build();
    append_child(&digest_label, &digest_title)?;
    append_child(&digest_label, &digest_caption)?;
    append_child(&digest_row, &digest_label)?;

    let digest_select = Select::new(
        vec![
            SelectOption::new("daily", "Ежедневно"),
            SelectOption::new("weekly", "Раз в неделю"),
            SelectOption::new("never", "Никогда"),
        ],
        "Частота",
        SelectState::uncontrolled(Some("daily")),
    )?;
    append_child(&digest_row, digest_select.root())?;
    append_child(&notify_content, &digest_row)?;

    let save_notify = ui::button("Сохранить", "button secondary")?;
    {
        let digest_select = digest_select.clone();
        on_click(&save_notify, move |_| {
            log::info!(
                "💾 Preferencias guardadas (demo): digest={}",
                digest_select.value()
            );
        })?;
    }
    append_child(&notify_content, &save_notify)?;
    append_child(&grid, &notify_card)?;

    // Apariencia
    let (theme_card, theme_content) =
        ui::card(Some("Внешний вид"), Some("Настройки темы и отображения"))?;
    let theme_row = ElementBuilder::new("div")?.class("settings-row").build();
    let theme_label = ElementBuilder::new("div")?.build();
    let theme_title = ElementBuilder::new("p")?
        .class("settings-row-title")
        .text("Темная тема")
        .build();
    let theme_caption = ElementBuilder::new("p")?
        .class("list-row-meta")
        .text("Переключить между светлой и темной темой")
        .build();
    append_child(&theme_label, &theme_title)?;
    append_child(&theme_label, &theme_caption)?;
    append_child(&theme_row, &theme_label)?;

    let theme_btn_label = match ctx.store.theme() {
        Theme::Light => "🌙 Темная",
        Theme::Dark => "☀️ Светлая",
    };
    let theme_btn = ui::button(theme_btn_label, "button outline")?;
    {
        let store = ctx.store.clone();
        on_click(&theme_btn, move |_| {
            store.toggle_theme();
        })?;
    }
    append_child(&theme_row, &theme_btn)?;
    append_child(&theme_content, &theme_row)?;
    append_child(&grid, &theme_card)?;

    append_child(&page, &grid)?;
    Ok(page)
}

/// Fila con toggle-switch, como las secciones de configuración clásicas.
fn toggle_section(label: &str, description: &str) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?.class("settings-row").build();

    let info = ElementBuilder::new("div")?.build();
    let title = ElementBuilder::new("p")?.class("settings-row-title").text(label).build();
    let caption = ElementBuilder::new("p")?.class("list-row-meta").text(description).build();
    append_child(&info, &title)?;
    append_child(&info, &caption)?;
    append_child(&section, &info)?;

    let toggle_container = ElementBuilder::new("label")?.class("toggle-switch").build();
    let toggle_input = create_element("input")?;
    set_attribute(&toggle_input, "type", "checkbox")?;
    set_attribute(&toggle_input, "checked", "checked")?;
    {
        let label = label.to_string();
        on_change(&toggle_input, move |e| {
            use wasm_bindgen::JsCast;
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                log::info!("🔔 Notificación '{}': {}", label, input.checked());
            }
        })?;
    }
    let toggle_slider = ElementBuilder::new("span")?.class("toggle-slider").build();
    append_child(&toggle_container, &toggle_input)?;
    append_child(&toggle_container, &toggle_slider)?;
    append_child(&section, &toggle_container)?;

    Ok(section)
}
