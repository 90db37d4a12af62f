use dioxus::prelude::*;
use futures::StreamExt;
use scholarlink_core::{expire_after, NotificationQueue, ReviewBoard, Shown};
use scholarlink_ui::ToastStack;

use crate::components::Workspace;
use crate::context::{MyApplications, Notifier, Opportunities, SubmitLatency};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the notification queue, the sample records and
/// the single workspace view.
#[component]
pub fn App() -> Element {
    let settings = use_hook(crate::settings);
    let config = settings.config.clone();

    let queue = use_signal(|| NotificationQueue::with_limit(config.max_notifications));

    // Expiry timers are children of this scope and stop when it unmounts
    let timers = use_coroutine(move |mut rx: UnboundedReceiver<Shown>| async move {
        while let Some(shown) = rx.next().await {
            let mut queue = queue;
            spawn(async move {
                expire_after(shown, move |id| queue.write().remove(id)).await;
            });
        }
    });

    let notifier = use_context_provider(|| {
        Notifier::new(queue, timers, config.notification_duration())
    });

    let samples = settings.samples.clone();
    let board = use_signal(|| ReviewBoard::new(samples.applicants.clone()));
    let opportunities = use_signal(|| samples.opportunities.clone());
    let applications = use_signal(|| samples.applications.clone());

    use_context_provider(|| board);
    use_context_provider(|| Opportunities(opportunities));
    use_context_provider(|| MyApplications(applications));
    use_context_provider(|| SubmitLatency(config.simulated_latency()));

    let items: Vec<_> = queue.read().iter().cloned().collect();

    rsx! {
        style { {GLOBAL_STYLES} }
        Workspace {}
        ToastStack {
            items: items,
            on_dismiss: move |id| notifier.remove(id),
        }
    }
}
