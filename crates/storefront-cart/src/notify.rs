//! Auto-clear scheduling for the transient added-to-cart notification.
//!
//! Each add bumps a generation counter; the scheduled clear carries the
//! generation it was created for and [`CartStore::clear_notification`]
//! ignores stale ones. Aborting the returned handle on unmount stops the
//! timer outright.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::store::CartStore;

/// How long the added-to-cart notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Spawns a task that clears the notification for `generation` after
/// [`NOTIFICATION_TTL`].
pub fn schedule_notification_clear(
    store: Arc<Mutex<CartStore>>,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(NOTIFICATION_TTL).await;
        store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear_notification(generation);
    })
}
