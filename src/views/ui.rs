// ============================================================================
// UI HELPERS - Piezas pequeñas compartidas por las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

pub fn page(extra_class: &str) -> Result<Element, JsValue> {
    let class = if extra_class.is_empty() {
        "page".to_string()
    } else {
        format!("page {}", extra_class)
    };
    Ok(ElementBuilder::new("div")?.class(&class).build())
}

pub fn page_header(title: &str, subtitle: &str) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?.class("page-header").build();
    let h1 = ElementBuilder::new("h1")?.text(title).build();
    append_child(&header, &h1)?;
    if !subtitle.is_empty() {
        let p = ElementBuilder::new("p")?.class("page-subtitle").text(subtitle).build();
        append_child(&header, &p)?;
    }
    Ok(header)
}

/// Card con cabecera opcional. Devuelve (card, contenedor de contenido).
pub fn card(title: Option<&str>, description: Option<&str>) -> Result<(Element, Element), JsValue> {
    let card = ElementBuilder::new("div")?.class("card").build();
    if title.is_some() || description.is_some() {
        let header = ElementBuilder::new("div")?.class("card-header").build();
        if let Some(title) = title {
            let h = ElementBuilder::new("h2")?.class("card-title").text(title).build();
            append_child(&header, &h)?;
        }
        if let Some(description) = description {
            let p = ElementBuilder::new("p")?
                .class("card-description")
                .text(description)
                .build();
            append_child(&header, &p)?;
        }
        append_child(&card, &header)?;
    }
    let content = ElementBuilder::new("div")?.class("card-content").build();
    append_child(&card, &content)?;
    Ok((card, content))
}

pub fn badge(text: &str, variant: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("span")?
        .class(&format!("badge {}", variant))
        .text(text)
        .build())
}

pub fn avatar(initials: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("avatar").text(initials).build())
}

pub fn stat_card(title: &str, icon: &str, value: &str, caption: &str) -> Result<Element, JsValue> {
    let (card, content) = card(None, None)?;
    let header = ElementBuilder::new("div")?.class("stat-header").build();
    let title_el = ElementBuilder::new("span")?.class("stat-title").text(title).build();
    let icon_el = ElementBuilder::new("span")?.class("stat-icon").text(icon).build();
    append_child(&header, &title_el)?;
    append_child(&header, &icon_el)?;

    let value_el = ElementBuilder::new("div")?.class("stat-value").text(value).build();
    let caption_el = ElementBuilder::new("p")?.class("stat-caption").text(caption).build();
    append_child(&content, &header)?;
    append_child(&content, &value_el)?;
    append_child(&content, &caption_el)?;
    Ok(card)
}

pub fn empty_card(message: &str) -> Result<Element, JsValue> {
    let (card, content) = card(None, None)?;
    let p = ElementBuilder::new("p")?.class("empty-message").text(message).build();
    append_child(&content, &p)?;
    Ok(card)
}

pub fn skeleton(extra_class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(&format!("skeleton {}", extra_class))
        .build())
}

/// Página de carga genérica: título + bloque grande.
pub fn loading_page() -> Result<Element, JsValue> {
    let page = page("")?;
    append_child(&page, &skeleton("skeleton-title")?)?;
    append_child(&page, &skeleton("skeleton-block")?)?;
    Ok(page)
}

pub fn button(label: &str, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(label)
        .build())
}

/// Barra de progreso simple (0..=100).
pub fn progress_bar(percent: u32) -> Result<Element, JsValue> {
    let track = ElementBuilder::new("div")?.class("bar-track").build();
    let fill = ElementBuilder::new("div")?
        .class("bar-fill")
        .attr("style", &format!("width: {}%", percent.min(100)))?
        .build();
    append_child(&track, &fill)?;
    Ok(track)
}
