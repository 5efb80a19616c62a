//! Debounce stage for search input
//!
//! A [`Debouncer`] forwards only the last value pushed before a quiet period
//! of `delay`. Each push restarts the timer. Typical use is between a text
//! input and [`ListController::handle_search`](super::ListController::handle_search):
//!
//! ```rust,ignore
//! let people = Arc::new(ListController::mount(fetcher, ListOptions::default()));
//! let search = {
//!     let people = Arc::clone(&people);
//!     Debouncer::spawn(Duration::from_millis(300), move |query: String| {
//!         people.handle_search(&query);
//!     })
//! };
//!
//! search.push("s".to_string());
//! search.push("sk".to_string());
//! search.push("sky".to_string()); // only "sky" reaches the controller
//! ```

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Background task delivering settled values to a callback
///
/// Dropping the debouncer stops the task; a value still waiting for its quiet
/// period is discarded.
#[derive(Debug)]
pub struct Debouncer<V> {
    tx: mpsc::UnboundedSender<V>,
    task: JoinHandle<()>,
}

impl<V> Debouncer<V>
where
    V: Send + 'static,
{
    /// Spawn the debounce task on the current Tokio runtime
    pub fn spawn<F>(delay: Duration, mut on_settle: F) -> Self
    where
        F: FnMut(V) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<V>();

        let task = tokio::spawn(async move {
            let mut pending: Option<V> = None;
            let mut deadline: Option<Instant> = None;

            loop {
                tokio::select! {
                    input = rx.recv() => match input {
                        Some(value) => {
                            pending = Some(value);
                            deadline = Some(Instant::now() + delay);
                        }
                        None => break,
                    },
                    () = sleep_until(deadline), if deadline.is_some() => {
                        deadline = None;
                        if let Some(value) = pending.take() {
                            on_settle(value);
                        }
                    }
                }
            }
        });

        Self { tx, task }
    }

    /// Feed a new value, restarting the quiet period
    ///
    /// Returns `false` when the task is no longer running.
    pub fn push(&self, value: V) -> bool {
        self.tx.send(value).is_ok()
    }
}

impl<V> Drop for Debouncer<V> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(String) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().unwrap().push(value))
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_settles() {
        let (seen, sink) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(300), sink);

        debouncer.push("s".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("sk".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("sky".to_string());
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["sky".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_settle() {
        let (seen, sink) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(300), sink);

        debouncer.push("luke".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("leia".to_string());
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["luke".to_string(), "leia".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_pending_value() {
        let (seen, sink) = recorder();
        let debouncer = Debouncer::spawn(Duration::from_millis(300), sink);

        debouncer.push("han".to_string());
        drop(debouncer);
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(seen.lock().unwrap().is_empty());
    }
}
