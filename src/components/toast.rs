use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Info => "#6c757d",
            ToastKind::Success => "#28a745",
            ToastKind::Error => "#dc3545",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, waiting for the slide-in.
    Entering,
    Shown,
    /// Sliding out, removed once the exit transition ends.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    /// Each toast gets its own element, so a replacement mounts fresh and
    /// off-screen instead of reusing the node of the one it replaces.
    pub fn dom_key(&self) -> String {
        format!("toast-{}", self.id)
    }
}

pub enum ToastAction {
    Show { id: u64, message: String, kind: ToastKind },
    Enter(u64),
    Dismiss(u64),
    Remove(u64),
}

/// The page holds at most one toast. Showing a new one replaces the old one,
/// and actions addressed to a toast that is no longer current are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn apply(&self, action: ToastAction) -> ToastSlot {
        let mut next = self.clone();
        match action {
            ToastAction::Show { id, message, kind } => {
                next.current = Some(Toast {
                    id,
                    message,
                    kind,
                    phase: ToastPhase::Entering,
                });
            }
            ToastAction::Enter(id) => {
                if let Some(toast) = next
                    .current
                    .as_mut()
                    .filter(|t| t.id == id && t.phase == ToastPhase::Entering)
                {
                    toast.phase = ToastPhase::Shown;
                }
            }
            ToastAction::Dismiss(id) => {
                if let Some(toast) = next.current.as_mut().filter(|t| t.id == id) {
                    toast.phase = ToastPhase::Leaving;
                }
            }
            ToastAction::Remove(id) => {
                if next.current.as_ref().map_or(false, |t| t.id == id) {
                    next.current = None;
                }
            }
        }
        next
    }
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

// Timers of the toast currently on screen. Dropping a timer cancels it.
struct PendingTimers<T> {
    id: u64,
    enter: Option<T>,
    dismiss: Option<T>,
    remove: Option<T>,
}

impl<T> PendingTimers<T> {
    fn new(id: u64) -> Self {
        Self {
            id,
            enter: None,
            dismiss: None,
            remove: None,
        }
    }

    /// Starts tracking toast `id`, handing back the previous toast's timers.
    fn replace_for(&mut self, id: u64) -> PendingTimers<T> {
        std::mem::replace(self, PendingTimers::new(id))
    }

    fn arm(&mut self, enter: T, dismiss: T) {
        self.enter = Some(enter);
        self.dismiss = Some(dismiss);
    }

    /// Moves toast `id` into its exit phase. Returns the timers it replaces,
    /// or None when `id` is stale or already leaving; `remove` is only built
    /// in the first case.
    fn begin_dismiss(&mut self, id: u64, remove: impl FnOnce() -> T) -> Option<Vec<T>> {
        if self.id != id || self.remove.is_some() {
            return None;
        }
        let cancelled = self.enter.take().into_iter().chain(self.dismiss.take()).collect();
        self.remove = Some(remove());
        Some(cancelled)
    }
}

/// Handle for raising notifications, available through `use_notifier`.
#[derive(Clone)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastSlot>,
    pending: Rc<RefCell<PendingTimers<Timeout>>>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

impl Notifier {
    fn new(dispatcher: UseReducerDispatcher<ToastSlot>) -> Self {
        Self {
            dispatcher,
            pending: Rc::new(RefCell::new(PendingTimers::new(0))),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let message = message.into();
        log::debug!("Showing {} notification #{}: {}", kind.class_suffix(), id, message);

        // Cancels everything still scheduled for the previous toast
        let previous = self.pending.borrow_mut().replace_for(id);
        drop(previous);
        self.dispatcher.dispatch(ToastAction::Show { id, message, kind });

        let enter = {
            let dispatcher = self.dispatcher.clone();
            Timeout::new(config::TOAST_ENTER_DELAY_MS, move || {
                dispatcher.dispatch(ToastAction::Enter(id));
            })
        };
        let dismiss = {
            let notifier = self.clone();
            Timeout::new(config::TOAST_LIFETIME_MS, move || {
                notifier.dismiss(id);
            })
        };
        self.pending.borrow_mut().arm(enter, dismiss);
    }

    /// Slides the toast out and removes it after the exit transition. Used by
    /// both the close button and the auto-dismiss timer; the second caller is
    /// a no-op.
    pub fn dismiss(&self, id: u64) {
        let cancelled = {
            let dispatcher = self.dispatcher.clone();
            self.pending.borrow_mut().begin_dismiss(id, move || {
                Timeout::new(config::TOAST_EXIT_MS, move || {
                    dispatcher.dispatch(ToastAction::Remove(id));
                })
            })
        };
        if let Some(cancelled) = cancelled {
            self.dispatcher.dispatch(ToastAction::Dismiss(id));
            drop(cancelled);
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("use_notifier called outside of a ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let slot = use_reducer(ToastSlot::default);
    let notifier = {
        let dispatcher = slot.dispatcher();
        use_state(move || Notifier::new(dispatcher))
    };
    let notifier = (*notifier).clone();

    let toast = match slot.current() {
        Some(toast) => {
            let offset = if toast.phase == ToastPhase::Shown { "0" } else { "100%" };
            let style = format!(
                "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
                 padding: 1rem 1.5rem; border-radius: 4px; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); \
                 z-index: 10000; transform: translateX({}); transition: transform 0.3s ease; \
                 max-width: 300px; font-size: 0.9rem;",
                toast.kind.background(),
                offset
            );
            let on_close = {
                let notifier = notifier.clone();
                let id = toast.id;
                Callback::from(move |_: MouseEvent| notifier.dismiss(id))
            };
            html! {
                <div
                    key={toast.dom_key()}
                    class={classes!("notification", format!("notification-{}", toast.kind.class_suffix()))}
                    style={style}
                >
                    <div class="notification-content">
                        <span class="notification-message">{ toast.message.clone() }</span>
                        <button class="notification-close" onclick={on_close}>{"\u{00d7}"}</button>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            { toast }
        </ContextProvider<Notifier>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn show(slot: &ToastSlot, id: u64, kind: ToastKind) -> ToastSlot {
        slot.apply(ToastAction::Show {
            id,
            message: format!("message {}", id),
            kind,
        })
    }

    #[rstest]
    fn test_show_starts_off_screen() {
        let slot = show(&ToastSlot::default(), 1, ToastKind::Info);

        let toast = slot.current().unwrap();
        assert_eq!(toast.phase, ToastPhase::Entering);
        assert_eq!(toast.message, "message 1");
    }

    #[rstest]
    fn test_rapid_shows_keep_a_single_toast() {
        // Arrange
        let mut slot = ToastSlot::default();

        // Act
        for id in 1..=5 {
            slot = show(&slot, id, ToastKind::Error);
        }

        // Assert
        let toast = slot.current().unwrap();
        assert_eq!(toast.id, 5);
        assert_eq!(toast.message, "message 5");
    }

    #[rstest]
    fn test_full_lifecycle() {
        let slot = show(&ToastSlot::default(), 1, ToastKind::Success);

        let slot = slot.apply(ToastAction::Enter(1));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Shown);

        let slot = slot.apply(ToastAction::Dismiss(1));
        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);

        let slot = slot.apply(ToastAction::Remove(1));
        assert!(slot.current().is_none());
    }

    #[rstest]
    fn test_stale_actions_do_not_touch_replacement() {
        // Arrange
        let slot = show(&ToastSlot::default(), 1, ToastKind::Info);
        let slot = show(&slot, 2, ToastKind::Success).apply(ToastAction::Enter(2));

        // Act
        let slot = slot
            .apply(ToastAction::Dismiss(1))
            .apply(ToastAction::Remove(1));

        // Assert
        let toast = slot.current().unwrap();
        assert_eq!(toast.id, 2);
        assert_eq!(toast.phase, ToastPhase::Shown);
    }

    #[rstest]
    fn test_remove_after_removal_is_noop() {
        let slot = show(&ToastSlot::default(), 1, ToastKind::Info)
            .apply(ToastAction::Dismiss(1))
            .apply(ToastAction::Remove(1));

        let again = slot.apply(ToastAction::Remove(1));

        assert_eq!(again, slot);
    }

    #[rstest]
    fn test_late_enter_does_not_bring_back_a_leaving_toast() {
        let slot = show(&ToastSlot::default(), 1, ToastKind::Info)
            .apply(ToastAction::Dismiss(1))
            .apply(ToastAction::Enter(1));

        assert_eq!(slot.current().unwrap().phase, ToastPhase::Leaving);
    }

    #[rstest]
    fn test_replacement_gets_a_fresh_element() {
        // Arrange
        let first = show(&ToastSlot::default(), 1, ToastKind::Info).apply(ToastAction::Enter(1));
        let first_key = first.current().unwrap().dom_key();

        // Act
        let second = show(&first, 2, ToastKind::Success);

        // Assert
        let toast = second.current().unwrap();
        assert_ne!(toast.dom_key(), first_key);
        assert_eq!(toast.phase, ToastPhase::Entering);
    }

    struct FakeTimer {
        name: &'static str,
        cancelled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.name);
        }
    }

    fn armed(id: u64, log: &Rc<RefCell<Vec<&'static str>>>) -> PendingTimers<FakeTimer> {
        let timer = |name| FakeTimer {
            name,
            cancelled: log.clone(),
        };
        let mut pending = PendingTimers::new(0);
        drop(pending.replace_for(id));
        pending.arm(timer("enter"), timer("dismiss"));
        pending
    }

    #[rstest]
    fn test_manual_close_cancels_auto_dismiss() {
        // Arrange
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pending = armed(1, &log);
        let remove_log = log.clone();

        // Act
        let cancelled = pending.begin_dismiss(1, || FakeTimer {
            name: "remove",
            cancelled: remove_log,
        });
        drop(cancelled);

        // Assert
        assert_eq!(*log.borrow(), vec!["enter", "dismiss"]);
        assert!(pending.enter.is_none());
        assert!(pending.dismiss.is_none());
        assert!(pending.remove.is_some());
    }

    #[rstest]
    fn test_second_dismiss_is_noop() {
        // Arrange
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pending = armed(1, &log);
        let remove_log = log.clone();
        drop(pending.begin_dismiss(1, || FakeTimer {
            name: "remove",
            cancelled: remove_log,
        }));
        let mut built = false;

        // Act
        let again = pending.begin_dismiss(1, || {
            built = true;
            FakeTimer {
                name: "second remove",
                cancelled: log.clone(),
            }
        });

        // Assert
        assert!(again.is_none());
        assert!(!built);
        assert_eq!(*log.borrow(), vec!["enter", "dismiss"]);
    }

    #[rstest]
    fn test_dismiss_for_replaced_toast_is_ignored() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pending = armed(2, &log);

        let stale = pending.begin_dismiss(1, || FakeTimer {
            name: "remove",
            cancelled: log.clone(),
        });

        assert!(stale.is_none());
        assert!(pending.dismiss.is_some());
        assert!(log.borrow().is_empty());
    }

    #[rstest]
    fn test_new_toast_cancels_previous_timers() {
        // Arrange
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut pending = armed(1, &log);

        // Act
        let previous = pending.replace_for(2);
        drop(previous);

        // Assert
        assert_eq!(*log.borrow(), vec!["enter", "dismiss"]);
        assert_eq!(pending.id, 2);
        assert!(pending.enter.is_none() && pending.dismiss.is_none() && pending.remove.is_none());
    }

    #[rstest]
    #[case(ToastKind::Info, "info", "#6c757d")]
    #[case(ToastKind::Success, "success", "#28a745")]
    #[case(ToastKind::Error, "error", "#dc3545")]
    fn test_kind_styling(#[case] kind: ToastKind, #[case] suffix: &str, #[case] colour: &str) {
        assert_eq!(kind.class_suffix(), suffix);
        assert_eq!(kind.background(), colour);
    }

    #[rstest]
    fn test_default_kind_is_info() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }
}
