use crate::constants::*;
use crate::dom;
use web_sys as web;

#[inline]
pub fn set_country_label(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(COUNTRY_LABEL_ID) {
        el.set_text_content(Some(text));
    }
}

/// Switch the hover label to its highlight color.
#[inline]
pub fn highlight_label(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(COUNTRY_LABEL_ID) {
        dom::set_style(&el, "color", LABEL_HIGHLIGHT_COLOR);
    }
}

/// Write the destination display name into the floating card, if present.
pub fn set_destination_card(document: &web::Document, name: &str) {
    let Some(card) = document.get_element_by_id(DESTINATION_CARD_ID) else {
        return;
    };
    match card.query_selector(DESTINATION_NAME_SELECTOR) {
        Ok(Some(el)) => el.set_text_content(Some(name)),
        Ok(None) => {}
        Err(e) => log::warn!("[overlay] bad selector: {:?}", e),
    }
}

/// Pin the info image to the bottom-right corner of the info panel,
/// replacing any earlier one.
pub fn setup_info_panel(document: &web::Document) -> anyhow::Result<()> {
    let Some(panel) = document.get_element_by_id(INFO_PANEL_ID) else {
        return Ok(());
    };
    if let Ok(Some(old)) = panel.query_selector(&format!(".{INFO_IMAGE_CLASS}")) {
        old.remove();
    }

    let container = dom::create_element(document, "div")?;
    container.set_class_name(INFO_IMAGE_CLASS);
    for (k, v) in [
        ("position", "absolute"),
        ("bottom", "10px"),
        ("right", "15px"),
        ("width", "40%"),
        ("height", "70%"),
        ("display", "flex"),
        ("justify-content", "flex-end"),
        ("align-items", "flex-end"),
    ] {
        dom::set_style(&container, k, v);
    }

    let img = dom::create_element(document, "img")?;
    img.set_attribute("src", INFO_IMAGE_URL)
        .and_then(|_| img.set_attribute("alt", INFO_IMAGE_ALT))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for (k, v) in [("max-height", "100%"), ("width", "auto"), ("object-fit", "contain")] {
        dom::set_style(&img, k, v);
    }

    dom::append(&container, &img)?;
    dom::append(&panel, &container)
}
