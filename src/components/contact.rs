use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{use_notifier, ToastKind};
use crate::config;
use crate::error::{BindError, ValidationError};

const SENDING_MESSAGE: &str = "Sending your message...";
const SENT_MESSAGE: &str = "Message sent! We will get back to you soon.";

/// Field values read once per submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl FormSnapshot {
    /// Project type is optional, everything else must be filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// What a submit does: an immediate notification and, for accepted forms, a
/// second one after the fake round trip followed by a form reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Accepted,
}

impl SubmitOutcome {
    pub fn plan(snapshot: &FormSnapshot) -> Self {
        match snapshot.validate() {
            Ok(()) => SubmitOutcome::Accepted,
            Err(err) => SubmitOutcome::Rejected(err),
        }
    }

    pub fn immediate(self) -> (ToastKind, String) {
        match self {
            SubmitOutcome::Rejected(err) => (ToastKind::Error, err.to_string()),
            SubmitOutcome::Accepted => (ToastKind::Info, SENDING_MESSAGE.to_string()),
        }
    }

    /// Notification shown after the delay; the form is reset along with it.
    pub fn after_delay(self) -> Option<(ToastKind, &'static str)> {
        match self {
            SubmitOutcome::Rejected(_) => None,
            SubmitOutcome::Accepted => Some((ToastKind::Success, SENT_MESSAGE)),
        }
    }
}

// The `\s` class of JavaScript regular expressions.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' '
            | '\u{a0}' | '\u{1680}' | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}'
            | '\u{3000}' | '\u{feff}'
    )
}

/// Loose `local@domain.tld` shape check: no whitespace, exactly one `@`, and
/// a dot in the domain with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Default, PartialEq)]
struct ContactFields {
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    project_type: NodeRef,
    message: NodeRef,
}

impl ContactFields {
    fn input(node: &NodeRef, label: &'static str) -> Result<String, BindError> {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .ok_or(BindError::MissingElement(label))
    }

    fn snapshot(&self) -> Result<FormSnapshot, BindError> {
        let message = self
            .message
            .cast::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .ok_or(BindError::MissingElement("contact message"))?;

        Ok(FormSnapshot {
            name: Self::input(&self.name, "contact name")?,
            email: Self::input(&self.email, "contact email")?,
            project_type: Self::input(&self.project_type, "contact project type")?,
            message,
        })
    }

    fn form(&self) -> Result<HtmlFormElement, BindError> {
        self.form
            .cast::<HtmlFormElement>()
            .ok_or(BindError::MissingElement("contact form"))
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let notifier = use_notifier();
    let fields = use_state(ContactFields::default);

    let onsubmit = {
        let fields = (*fields).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let snapshot = match fields.snapshot() {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    log::error!("Contact form is not bound: {}", err);
                    return;
                }
            };
            let outcome = SubmitOutcome::plan(&snapshot);
            let (kind, message) = outcome.immediate();
            notifier.notify(message, kind);

            let Some((kind, message)) = outcome.after_delay() else {
                log::warn!("Rejected contact form: {:?}", outcome);
                return;
            };
            log::info!("Submitting contact form ({} / {:?})", snapshot.email, snapshot.project_type);

            let notifier = notifier.clone();
            let fields = fields.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                notifier.notify(message, kind);
                match fields.form() {
                    Ok(form) => form.reset(),
                    Err(err) => log::error!("Could not reset contact form: {}", err),
                }
            });
        })
    };

    html! {
        <div class="contact-form">
            <form ref={fields.form.clone()} {onsubmit} novalidate={true}>
                <input ref={fields.name.clone()} type="text" placeholder="Your name" />
                <input ref={fields.email.clone()} type="email" placeholder="Your email" />
                <input ref={fields.project_type.clone()} type="text" placeholder="Project type" />
                <textarea ref={fields.message.clone()} rows="5" placeholder="Tell us about your project"></textarea>
                <button type="submit" class="btn btn-primary">{"Send message"}</button>
            </form>
        </div>
    }
}
