//! Notification expiry under paused tokio time.
//!
//! The queue is shared the way a single-threaded UI would share it; the
//! mutex only satisfies the `'static` task bound.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use scholarlink_core::{expire_after, NotificationKind, NotificationQueue, DEFAULT_DURATION};

type SharedQueue = Arc<Mutex<NotificationQueue>>;

fn shared() -> SharedQueue {
    Arc::new(Mutex::new(NotificationQueue::new()))
}

fn spawn_expiry(queue: &SharedQueue, shown: scholarlink_core::Shown) -> tokio::task::JoinHandle<bool> {
    let queue = Arc::clone(queue);
    tokio::spawn(async move { expire_after(shown, |id| queue.lock().remove(id)).await })
}

#[tokio::test(start_paused = true)]
async fn notification_expires_after_duration() {
    let queue = shared();
    let shown = queue
        .lock()
        .show(NotificationKind::Success, "Saved", Duration::from_millis(5000));
    let timer = spawn_expiry(&queue, shown);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(queue.lock().contains(shown.id));

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(timer.await.unwrap());
    assert!(queue.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_remove_then_timer_is_noop() {
    let queue = shared();
    let shown = queue
        .lock()
        .show(NotificationKind::Info, "Heads up", DEFAULT_DURATION);
    let other = queue
        .lock()
        .show(NotificationKind::Info, "Still here", Duration::ZERO);
    let timer = spawn_expiry(&queue, shown);

    assert!(queue.lock().remove(shown.id));
    assert!(!queue.lock().contains(shown.id));

    tokio::time::sleep(DEFAULT_DURATION * 2).await;
    assert!(!timer.await.unwrap(), "timer must report nothing removed");

    let remaining: Vec<_> = queue.lock().iter().map(|n| n.id).collect();
    assert_eq!(remaining, vec![other.id]);
}

#[tokio::test(start_paused = true)]
async fn zero_duration_persists_until_removed() {
    let queue = shared();
    let shown = queue
        .lock()
        .show(NotificationKind::Error, "Failed", Duration::ZERO);
    assert_eq!(shown.expires_after, None);

    // No timer to wait on
    assert!(!spawn_expiry(&queue, shown).await.unwrap());

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert!(queue.lock().contains(shown.id));

    assert!(queue.lock().remove(shown.id));
    assert!(queue.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn staggered_timers_keep_insertion_order() {
    let queue = shared();
    let short = queue
        .lock()
        .show(NotificationKind::Warning, "short", Duration::from_millis(1000));
    let long = queue
        .lock()
        .show(NotificationKind::Info, "long", Duration::from_millis(3000));
    let newest = queue
        .lock()
        .show(NotificationKind::Success, "newest", Duration::from_millis(2000));
    let timers = [
        spawn_expiry(&queue, short),
        spawn_expiry(&queue, long),
        spawn_expiry(&queue, newest),
    ];

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let visible: Vec<_> = queue.lock().iter().map(|n| n.message.clone()).collect();
    assert_eq!(visible, vec!["long", "newest"]);

    for timer in timers {
        assert!(timer.await.unwrap());
    }
    assert!(queue.lock().is_empty());
}
