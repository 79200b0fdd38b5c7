//! One-shot remote seed import.
//!
//! Bridges the synchronous TUI event loop (crossterm poll-based) with the
//! single async operation in the app: fetching the initial task batch
//! when no usable local snapshot exists. The fetch runs on a background
//! tokio task and reports through an mpsc channel that the main loop
//! drains non-blockingly on each tick.
//!
//! ```text
//! TUI (main thread)  ←── SeedEvent ───  tokio background task
//! ```

use std::time::Duration;

use tokio::sync::mpsc;

use termtask_core::seed::SeedTodo;
use termtask_core::task::Task;

/// Errors that can occur while fetching the remote seed payload.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent, timed out, or returned a failure
    /// status.
    #[error("seed request failed: {0}")]
    Request(reqwest::Error),
    /// The response body is not a valid seed payload.
    #[error("seed payload invalid: {0}")]
    Payload(reqwest::Error),
}

/// Events delivered from the background fetch to the TUI main loop.
#[derive(Debug)]
pub enum SeedEvent {
    /// The fetch succeeded. Tasks are already mapped and truncated, in
    /// payload order.
    Loaded(Vec<Task>),
    /// The fetch failed; the session starts with an empty list.
    Failed(String),
}

/// Configuration for the seed fetch.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Endpoint returning the JSON todo array.
    pub url: String,
    /// How many leading payload elements to import.
    pub count: usize,
    /// Overall request timeout.
    pub timeout: Duration,
}

/// Spawns the one-shot seed fetch and returns the event receiver.
///
/// Fire-and-forget: no cancellation handle. If the UI is torn down
/// before the fetch lands, the channel send fails and the result is
/// silently dropped.
pub fn spawn_seed_fetch(config: SeedConfig) -> mpsc::Receiver<SeedEvent> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        let event = match fetch_seed(&config).await {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "seed import fetched");
                SeedEvent::Loaded(tasks)
            }
            Err(err) => {
                tracing::warn!(url = %config.url, error = %err, "seed import failed");
                SeedEvent::Failed(err.to_string())
            }
        };
        let _ = tx.send(event).await;
    });
    rx
}

/// Fetches the seed payload and maps it into tasks.
///
/// Takes the first `count` payload elements; a shorter payload imports
/// whatever is there.
///
/// # Errors
///
/// Returns [`FetchError`] if the request fails, the server answers with
/// a failure status, or the body cannot be decoded.
pub async fn fetch_seed(config: &SeedConfig) -> Result<Vec<Task>, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(FetchError::Request)?;

    let todos: Vec<SeedTodo> = client
        .get(&config.url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(FetchError::Request)?
        .json()
        .await
        .map_err(FetchError::Payload)?;

    Ok(todos
        .into_iter()
        .take(config.count)
        .map(Task::from)
        .collect())
}
