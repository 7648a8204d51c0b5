// ============================================================================
// ASSISTANT - Chat con el asistente de demo
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, input_value, on_click, on_input, on_keydown, ElementBuilder};
use crate::models::{ChatMessage, ChatRole};
use crate::services::api;
use crate::views::ui;

const QUICK_PROMPTS: [(&str, &str); 3] = [
    ("📄 Объясни критерии оценки", "объясни критерии оценки"),
    ("📚 Создай вопросы для теста", "создай вопросы для теста"),
    ("❓ Суть частых ошибок", "суммируй частые ошибки"),
];

pub fn render_assistant(ctx: &AppContext) -> Result<Element, JsValue> {
    let page = ui::page("assistant")?;
    append_child(
        &page,
        &ui::page_header(
            "✨ AI Ассистент",
            "Задавайте вопросы о проверке заданий, создании фидбека и анализе успеваемости",
        )?,
    )?;

    let (card, content) = ui::card(Some("Чат с ассистентом"), None)?;
    crate::dom::add_class(&card, "chat-card")?;

    // Transcripción
    let messages_container = ElementBuilder::new("div")?.class("chat-messages").build();
    for message in ctx.ui.chat_messages.borrow().iter() {
        append_child(&messages_container, &render_message(message)?)?;
    }
    if *ctx.ui.chat_sending.borrow() {
        let typing = ElementBuilder::new("p")?
            .class("chat-typing")
            .text("Ассистент печатает...")
            .build();
        append_child(&messages_container, &typing)?;
    }
    append_child(&content, &messages_container)?;

    // Mantener la vista pegada al último mensaje una vez montado el DOM
    {
        let container = messages_container.clone();
        Timeout::new(0, move || {
            container.set_scroll_top(container.scroll_height());
        })
        .forget();
    }

    // Prompts rápidos
    let prompts_row = ElementBuilder::new("div")?.class("quick-prompts").build();
    for (label, prompt) in QUICK_PROMPTS {
        let btn = ui::button(label, "button outline quick-prompt")?;
        let ui_state = ctx.ui.clone();
        on_click(&btn, move |_| {
            *ui_state.chat_input.borrow_mut() = prompt.to_string();
            crate::rerender_app();
        })?;
        append_child(&prompts_row, &btn)?;
    }
    append_child(&content, &prompts_row)?;

    // Entrada + envío
    let input_row = ElementBuilder::new("div")?.class("chat-input-row").build();
    let input = ElementBuilder::new("input")?
        .class("input chat-input")
        .attr("type", "text")?
        .attr("placeholder", "Напишите сообщение...")?
        .attr("value", &ctx.ui.chat_input.borrow())?
        .build();
    {
        let ui_state = ctx.ui.clone();
        on_input(&input, move |e| {
            if let Some(value) = input_value(&e) {
                *ui_state.chat_input.borrow_mut() = value;
            }
        })?;
    }

    let sending = *ctx.ui.chat_sending.borrow();
    let send_btn = ui::button("Отправить", "button primary")?;
    if sending {
        send_btn.set_attribute("disabled", "disabled")?;
    }

    let send: Rc<dyn Fn()> = {
        let ctx = ctx.clone();
        Rc::new(move || {
            let text = ctx.ui.chat_input.borrow().trim().to_string();
            if text.is_empty() || *ctx.ui.chat_sending.borrow() {
                return;
            }
            ctx.ui
                .chat_messages
                .borrow_mut()
                .push(ChatMessage::now(ChatRole::User, text.clone()));
            *ctx.ui.chat_input.borrow_mut() = String::new();
            *ctx.ui.chat_sending.borrow_mut() = true;
            crate::rerender_app();

            let ctx_async = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::send_chat_message(&text).await {
                    Ok(reply) => {
                        ctx_async.ui.chat_messages.borrow_mut().push(reply);
                    }
                    Err(e) => {
                        log::error!("❌ Error enviando mensaje: {}", e);
                    }
                }
                *ctx_async.ui.chat_sending.borrow_mut() = false;
                crate::rerender_app();
            });
        })
    };

    {
        let send = Rc::clone(&send);
        on_click(&send_btn, move |_| send())?;
    }
    {
        let send = Rc::clone(&send);
        on_keydown(&input, move |e| {
            if e.key() == "Enter" {
                send();
            }
        })?;
    }

    append_child(&input_row, &input)?;
    append_child(&input_row, &send_btn)?;
    append_child(&content, &input_row)?;

    append_child(&page, &card)?;
    Ok(page)
}

fn render_message(message: &ChatMessage) -> Result<Element, JsValue> {
    let class = match message.role {
        ChatRole::User => "chat-message user",
        ChatRole::Assistant => "chat-message assistant",
    };
    let wrapper = ElementBuilder::new("div")?.class(class).build();

    if message.role == ChatRole::Assistant {
        let avatar = ElementBuilder::new("div")?.class("avatar assistant-avatar").text("AI").build();
        append_child(&wrapper, &avatar)?;
    }

    let bubble = ElementBuilder::new("div")?.class("chat-bubble").build();
    let text = ElementBuilder::new("p")?.text(&message.content).build();
    let timestamp = ElementBuilder::new("span")?
        .class("chat-timestamp")
        .text(&crate::utils::format_date_time(&message.timestamp))
        .build();
    append_child(&bubble, &text)?;
    append_child(&bubble, &timestamp)?;
    append_child(&wrapper, &bubble)?;

    Ok(wrapper)
}
