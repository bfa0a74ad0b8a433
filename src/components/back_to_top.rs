use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_OFFSET
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (opacity, visibility) = if back_to_top_visible(scroll_y) {
        ("1", "visible")
    } else {
        ("0", "hidden")
    };

    let onclick = Callback::from(|_: MouseEvent| {
        if let Err(e) = dom::scroll_to_top() {
            log::error!("Failed to scroll to top: {}", e);
        }
    });

    let style = format!(
        "position: fixed; bottom: 30px; right: 30px; width: 45px; height: 45px; \
         background: #333; color: white; border: none; border-radius: 4px; cursor: pointer; \
         opacity: {}; visibility: {}; transition: all 0.3s ease; z-index: 1000; font-size: 0.9rem;",
        opacity, visibility
    );

    html! {
        <button class="back-to-top" aria-label="Back to top" {style} {onclick}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, false)]
    #[case(300.0, false)]
    #[case(301.0, true)]
    #[case(5000.0, true)]
    fn test_visible_past_threshold(#[case] scroll_y: f64, #[case] visible: bool) {
        assert_eq!(back_to_top_visible(scroll_y), visible);
    }
}
