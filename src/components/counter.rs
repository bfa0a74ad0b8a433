use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

use crate::components::reveal::{use_reveal, FadeIn, RevealOptions};
use crate::config;
use crate::dom;
use crate::error::BindError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterFrame {
    Running(String),
    Finished(String),
}

/// Counts from zero up to `target`, one fixed increment per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    current: f64,
    target: u32,
    increment: f64,
}

impl CounterState {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / config::FRAME_MS;
        Self {
            current: 0.0,
            target,
            increment: f64::from(target) / frames,
        }
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            CounterFrame::Running(format!("{}+", self.current.floor() as u64))
        } else {
            CounterFrame::Finished(format!("{}+", self.target))
        }
    }
}

/// Reads the leading integer of a label such as "150+". Leading whitespace
/// and a `+` sign are skipped; negative or non-numeric labels give None.
pub fn parse_leading_int(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(i, _)| i);
    text[..end].parse().ok()
}

/// Drives a `CounterState` from requestAnimationFrame until it reaches the
/// target. There is no way to stop it once started.
pub fn animate_counter<F>(target: u32, duration_ms: u32, mut on_frame: F) -> Result<(), BindError>
where
    F: FnMut(String) + 'static,
{
    let mut state = CounterState::new(target, duration_ms);
    log::debug!("Counting to {} in steps of {:.2}", target, state.increment());
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move || match state.step() {
        CounterFrame::Running(text) => {
            on_frame(text);
            let scheduled = next.borrow().as_ref().map(dom::request_animation_frame);
            if let Some(Err(e)) = scheduled {
                log::error!("Counter stopped early: {}", e);
                let _ = next.borrow_mut().take();
            }
        }
        CounterFrame::Finished(text) => {
            on_frame(text);
            // Dropping the closure ends the loop
            let _ = next.borrow_mut().take();
        }
    }));

    let started = frame.borrow().as_ref().map(dom::request_animation_frame);
    if let Some(Err(e)) = started {
        let _ = frame.borrow_mut().take();
        return Err(e);
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: u32,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let number_ref = use_node_ref();
    let display = use_state(|| format!("{}+", props.value));
    let started = use_reveal(number_ref.clone(), "stat number", RevealOptions::COUNTER);

    {
        let display = display.clone();
        let number_ref = number_ref.clone();
        use_effect_with_deps(
            move |started| {
                if *started {
                    let text = number_ref
                        .cast::<Element>()
                        .and_then(|el| el.text_content())
                        .unwrap_or_default();
                    match parse_leading_int(&text) {
                        Some(target) => {
                            let result = animate_counter(target, config::COUNTER_DURATION_MS, move |text| {
                                display.set(text)
                            });
                            if let Err(e) = result {
                                log::error!("Failed to start counter: {}", e);
                            }
                        }
                        None => log::warn!("Stat counter has no numeric value: {:?}", text),
                    }
                }
                || ()
            },
            started,
        );
    }

    html! {
        <FadeIn class="stat-item">
            <h4 ref={number_ref}>{ (*display).clone() }</h4>
            <p>{ props.label.clone() }</p>
        </FadeIn>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_to_end(mut state: CounterState) -> Vec<String> {
        let mut frames = Vec::new();
        loop {
            match state.step() {
                CounterFrame::Running(text) => frames.push(text),
                CounterFrame::Finished(text) => {
                    frames.push(text);
                    return frames;
                }
            }
        }
    }

    fn value(text: &str) -> u64 {
        text.trim_end_matches('+').parse().unwrap()
    }

    #[rstest]
    fn test_increment_for_two_second_run() {
        let state = CounterState::new(150, 2000);
        assert!((state.increment() - 1.2).abs() < 1e-9);
    }

    #[rstest]
    fn test_counts_up_to_exact_target() {
        // Arrange
        let state = CounterState::new(150, 2000);

        // Act
        let frames = run_to_end(state);

        // Assert
        assert_eq!(frames.last().map(String::as_str), Some("150+"));
        assert!(frames.iter().all(|f| f.ends_with('+')));
        assert!(frames.windows(2).all(|w| value(&w[0]) <= value(&w[1])));
        assert!(frames.len() >= 125 && frames.len() <= 126);
    }

    #[rstest]
    #[case(0, 2000)]
    #[case(25, 0)]
    #[case(0, 0)]
    fn test_degenerate_inputs_finish_immediately(#[case] target: u32, #[case] duration: u32) {
        let mut state = CounterState::new(target, duration);

        assert_eq!(state.step(), CounterFrame::Finished(format!("{}+", target)));
    }

    #[rstest]
    fn test_first_frame_floors_the_value() {
        let mut state = CounterState::new(1000, 2000);

        // 1000 / 125 = 8 per frame
        assert_eq!(state.step(), CounterFrame::Running("8+".to_string()));
        assert_eq!(state.step(), CounterFrame::Running("16+".to_string()));
    }

    #[rstest]
    #[case("150+", Some(150))]
    #[case("  98%", Some(98))]
    #[case("+12", Some(12))]
    #[case("50", Some(50))]
    #[case("-3", None)]
    #[case("Projects", None)]
    #[case("", None)]
    fn test_parse_leading_int(#[case] text: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_leading_int(text), expected);
    }
}
