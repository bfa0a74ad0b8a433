use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window};

use crate::error::BindError;

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

pub fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::NoDocument)
}

/// Smoothly scrolls the section named by an in-page `#id` href into view.
/// Hrefs that don't point at anything on the page are ignored.
pub fn smooth_scroll_to_anchor(href: &str) -> Result<(), BindError> {
    let id = href.trim_start_matches('#');
    if id.is_empty() {
        return Ok(());
    }
    let Some(target) = document()?.get_element_by_id(id) else {
        log::debug!("No scroll target for {}", href);
        return Ok(());
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top() -> Result<(), BindError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, BindError> {
    Ok(window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}
