use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Default,
    Scrolled,
}

impl NavbarStyle {
    pub fn for_offset(scroll_y: f64) -> Self {
        if scroll_y > config::NAVBAR_SCROLLED_OFFSET {
            NavbarStyle::Scrolled
        } else {
            NavbarStyle::Default
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            NavbarStyle::Default => "background: rgba(255, 255, 255, 0.98); border-bottom: 1px solid #f0f0f0;",
            NavbarStyle::Scrolled => "background: rgba(255, 255, 255, 0.98); border-bottom: 1px solid #e0e0e0;",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired before scrolling, used by the navbar to collapse the menu.
    #[prop_or_default]
    pub onfollow: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let onfollow = props.onfollow.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onfollow.emit(());
            if let Err(err) = dom::smooth_scroll_to_anchor(&href) {
                log::error!("Failed to scroll to {}: {}", href, err);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
        })
    };

    let active = (*menu_open).then_some("active");

    html! {
        <nav class="navbar" style={NavbarStyle::for_offset(scroll_y).css()}>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">{"Northlight Studio"}</AnchorLink>
                <ul class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item">
                            <AnchorLink href={*href} class="nav-link" onfollow={close_menu.clone()}>
                                { *label }
                            </AnchorLink>
                        </li>
                    }) }
                </ul>
                <div class={classes!("hamburger", active)} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
