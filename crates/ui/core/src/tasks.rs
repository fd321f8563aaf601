//! One-shot background computations published into an observable holder.

use tokio::sync::watch;

/// Runs `compute` on a blocking worker and publishes its result exactly
/// once into the returned holder.
///
/// The holder starts at `None` and transitions to `Some(value)` when the
/// computation finishes; subscribers await `changed()` or poll `borrow()`.
/// There is no cancellation, progress, or error channel: a panic inside
/// `compute` is handled by the runtime's task machinery and the holder
/// simply never fills.
pub fn spawn_value<T, F>(compute: F) -> watch::Receiver<Option<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = watch::channel(None);
    tokio::task::spawn_blocking(move || {
        let value = compute();
        // Receiver may have been dropped; the value is simply discarded.
        let _ = tx.send(Some(value));
    });
    rx
}
