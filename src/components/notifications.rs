//! Transient notification toasts.
//!
//! Every submission reports its outcome through the shared [`Notifier`]
//! sink. Each notification removes itself after a fixed lifetime,
//! independently of any other notification on screen.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::NOTIFICATION_LIFETIME_MS;
use crate::types::{Notification, Severity};

/// Shared notification sink.
///
/// A cheap `Copy` handle over a signal-backed list, handed to every
/// form as a prop. Concurrent submissions push into the same sink
/// without coordinating with one another.
#[derive(Clone, Copy)]
pub struct Notifier {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    /// Display a notification and schedule its removal.
    pub fn notify(&self, severity: Severity, message: impl Into<String>) {
        let id = self.insert(severity, message);

        let sink = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_LIFETIME_MS).await;
            sink.dismiss(id);
        });
    }

    /// Current notifications, oldest first.
    pub fn entries(&self) -> Vec<Notification> {
        self.items.get()
    }

    fn insert(&self, severity: Severity, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(Notification {
                id,
                severity,
                message: message.into(),
            });
        });

        id
    }

    fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast stack rendering the sink's current notifications.
#[component]
pub fn NotificationStack(notifier: Notifier) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || notifier.entries()
                key=|entry| entry.id
                children=move |entry| {
                    let class = format!("notification notification-{}", entry.severity.css_class());
                    view! {
                        <div class=class>{entry.message}</div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_are_appended_in_order() {
        let runtime = create_runtime();

        let notifier = Notifier::new();
        notifier.insert(Severity::Info, "first");
        notifier.insert(Severity::Danger, "second");

        let entries = notifier.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].severity, Severity::Danger);

        runtime.dispose();
    }

    #[test]
    fn dismissing_one_leaves_the_others_untouched() {
        let runtime = create_runtime();

        let notifier = Notifier::new();
        let first = notifier.insert(Severity::Success, "keep me out");
        let second = notifier.insert(Severity::Error, "still here");

        notifier.dismiss(first);

        let entries = notifier.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, second);
        assert_eq!(entries[0].message, "still here");

        runtime.dispose();
    }

    #[test]
    fn dismissing_an_expired_id_is_a_no_op() {
        let runtime = create_runtime();

        let notifier = Notifier::new();
        let id = notifier.insert(Severity::Info, "short-lived");
        notifier.dismiss(id);
        notifier.dismiss(id);

        assert!(notifier.entries().is_empty());

        runtime.dispose();
    }
}
