use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::BindError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    pub const FADE_IN: Self = Self {
        threshold: config::FADE_IN_THRESHOLD,
        root_margin: config::FADE_IN_ROOT_MARGIN,
    };
    pub const COUNTER: Self = Self {
        threshold: config::COUNTER_THRESHOLD,
        root_margin: "0px",
    };
    pub const IMAGE: Self = Self {
        threshold: config::IMAGE_THRESHOLD,
        root_margin: "0px",
    };
}

/// Runs a callback the first time it is fired and never again.
pub struct FireOnce<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> FireOnce<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// Returns true only on the call that actually ran the callback.
    pub fn fire(&mut self) -> bool {
        match self.callback.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

/// Live intersection observer. Dropping it disconnects the observer.
pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches `node` and calls `on_reveal` the first time it crosses the
/// visibility threshold, after which the element is no longer observed.
pub fn observe_once<F>(
    node: &NodeRef,
    label: &'static str,
    options: RevealOptions,
    on_reveal: F,
) -> Result<RevealHandle, BindError>
where
    F: FnOnce() + 'static,
{
    let element = node
        .cast::<Element>()
        .ok_or(BindError::MissingElement(label))?;

    let mut once = FireOnce::new(on_reveal);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    if once.fire() {
                        log::debug!("Revealed {}", label);
                    }
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);

    Ok(RevealHandle {
        observer,
        _callback: callback,
    })
}

/// True once the referenced element has been on screen.
#[hook]
pub fn use_reveal(node: NodeRef, label: &'static str, options: RevealOptions) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node| {
                let handle = match observe_once(node, label, options, move || revealed.set(true)) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        log::error!("Cannot watch {}: {}", label, e);
                        None
                    }
                };
                move || drop(handle)
            },
            node,
        );
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), "fade-in block", RevealOptions::FADE_IN);

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), "fade-in", visible.then_some("fade-in-up"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(RevealImage)]
pub fn reveal_image(props: &RevealImageProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), "portfolio image", RevealOptions::IMAGE);
    let opacity = if visible { 1.0 } else { config::IMAGE_RESTING_OPACITY };

    html! {
        <img
            ref={node}
            src={props.src.clone()}
            alt={props.alt.clone()}
            style={format!("opacity: {}; transition: opacity 0.6s ease;", opacity)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn test_fire_once_runs_callback_a_single_time() {
        // Arrange
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut once = FireOnce::new(move || counter.set(counter.get() + 1));

        // Act
        let first = once.fire();
        let second = once.fire();
        let third = once.fire();

        // Assert
        assert!(first);
        assert!(!second);
        assert!(!third);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_fire_once_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();

        let _once = FireOnce::new(move || counter.set(counter.get() + 1));

        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_counters_need_more_visibility_than_fades() {
        assert!(RevealOptions::COUNTER.threshold > RevealOptions::FADE_IN.threshold);
        assert_eq!(RevealOptions::FADE_IN.root_margin, "0px 0px -50px 0px");
        assert_eq!(RevealOptions::IMAGE.threshold, 0.1);
    }
}
