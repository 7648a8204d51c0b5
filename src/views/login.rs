// ============================================================================
// LOGIN VIEW - Pantalla de acceso
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, input_value, on_click, on_input, on_keydown, ElementBuilder};
use crate::router::Route;
use crate::services::api;
use crate::views::ui;

pub fn render_login(ctx: &AppContext) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("login-page").build();
    let (card, content) = ui::card(None, None)?;
    crate::dom::add_class(&card, "login-card")?;

    // Marca + títulos
    let brand = ElementBuilder::new("div")?.class("brand login-brand").build();
    let brand_icon = ElementBuilder::new("span")?.class("brand-icon").text("🧠").build();
    let brand_name = ElementBuilder::new("span")?
        .class("brand-name")
        .text(&crate::config::CONFIG.app_title)
        .build();
    append_child(&brand, &brand_icon)?;
    append_child(&brand, &brand_name)?;
    append_child(&content, &brand)?;

    let title = ElementBuilder::new("h1")?.class("login-title").text("Вход в систему").build();
    let subtitle = ElementBuilder::new("p")?
        .class("login-subtitle")
        .text("Введите email и пароль для входа")
        .build();
    append_child(&content, &title)?;
    append_child(&content, &subtitle)?;

    // Campos
    let email_input = labeled_input(&content, "Email", "email", &ctx.ui.login_email.borrow())?;
    {
        let ui_state = ctx.ui.clone();
        on_input(&email_input, move |e| {
            if let Some(value) = input_value(&e) {
                *ui_state.login_email.borrow_mut() = value;
            }
        })?;
    }

    let password_input =
        labeled_input(&content, "Пароль", "password", &ctx.ui.login_password.borrow())?;
    {
        let ui_state = ctx.ui.clone();
        on_input(&password_input, move |e| {
            if let Some(value) = input_value(&e) {
                *ui_state.login_password.borrow_mut() = value;
            }
        })?;
    }

    // Error de autenticación, si lo hay
    if let Some(error) = ctx.ui.login_error.borrow().as_ref() {
        let error_el = ElementBuilder::new("p")?.class("form-error").text(error).build();
        append_child(&content, &error_el)?;
    }

    let loading = *ctx.ui.login_loading.borrow();
    let submit_btn = ui::button(
        if loading { "Вход..." } else { "Войти" },
        "button primary login-submit",
    )?;
    if loading {
        submit_btn.set_attribute("disabled", "disabled")?;
    }

    let submit: Rc<dyn Fn()> = {
        let ctx = ctx.clone();
        Rc::new(move || {
            if *ctx.ui.login_loading.borrow() {
                return;
            }
            *ctx.ui.login_loading.borrow_mut() = true;
            *ctx.ui.login_error.borrow_mut() = None;
            crate::rerender_app();

            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let email = ctx.ui.login_email.borrow().clone();
                let password = ctx.ui.login_password.borrow().clone();
                match api::login(&email, &password).await {
                    Ok(user) => {
                        log::info!("✅ Login exitoso: {}", user.email);
                        *ctx.ui.login_loading.borrow_mut() = false;
                        // set_user persiste la sesión y dispara el re-render
                        ctx.store.set_user(Some(user));
                        ctx.navigate(Route::Dashboard);
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        *ctx.ui.login_loading.borrow_mut() = false;
                        *ctx.ui.login_error.borrow_mut() =
                            Some("Неверный email или пароль".to_string());
                        crate::rerender_app();
                    }
                }
            });
        })
    };

    {
        let submit = Rc::clone(&submit);
        on_click(&submit_btn, move |_| submit())?;
    }
    {
        let submit = Rc::clone(&submit);
        on_keydown(&password_input, move |e| {
            if e.key() == "Enter" {
                submit();
            }
        })?;
    }
    append_child(&content, &submit_btn)?;

    let hint = ElementBuilder::new("p")?
        .class("login-hint")
        .text("Для демо используйте любые данные")
        .build();
    append_child(&content, &hint)?;

    append_child(&page, &card)?;
    Ok(page)
}

fn labeled_input(
    parent: &Element,
    label: &str,
    input_type: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let field = ElementBuilder::new("div")?.class("form-field").build();
    let label_el = ElementBuilder::new("label")?.class("form-label").text(label).build();
    let input = ElementBuilder::new("input")?
        .class("input")
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    append_child(&field, &label_el)?;
    append_child(&field, &input)?;
    append_child(parent, &field)?;
    Ok(input)
}
