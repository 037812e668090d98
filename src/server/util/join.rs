//! Task-based fan-out for concurrent lookups.
//!
//! Every independent fetch runs as its own tokio task so lookups proceed in parallel on
//! the runtime's worker threads. Heterogeneous fetches are spawned with [`spawn_lookup`]
//! and joined with `tokio::try_join!`. Homogeneous per-entity lookups (one per panel,
//! ticket, team, ...) go through [`fan_out`], which bounds concurrency and writes every
//! result into the slot that matches its input index.
//!
//! Dropping a join group aborts the tasks it still owns, so the first failing lookup
//! cancels its siblings.

use futures::Future;
use tokio::task::{JoinError, JoinHandle, JoinSet};

/// Aborts the task when dropped before completion.
struct AbortOnDrop<R>(JoinHandle<R>);

impl<R> Drop for AbortOnDrop<R> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs `lookup` as its own task.
///
/// The returned future resolves to the lookup's result. Dropping it before completion
/// aborts the task, which lets `tokio::try_join!` cancel spawned siblings on the first
/// error.
///
/// # Returns
/// - `Ok(R)` - The lookup succeeded
/// - `Err(E)` - The lookup failed, or its task panicked
pub fn spawn_lookup<R, E, Fut>(lookup: Fut) -> impl Future<Output = Result<R, E>>
where
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    let mut task = AbortOnDrop(tokio::spawn(lookup));

    async move { (&mut task.0).await? }
}

/// Runs `f` for every item as a separate task with at most `limit` tasks in flight.
///
/// Results are returned in input order: each task owns the output slot at its input
/// index. The first task to fail decides the error, and the remaining tasks are aborted.
///
/// # Arguments
/// - `items` - Inputs to fan out over
/// - `limit` - Maximum concurrent tasks, values below 1 are treated as 1
/// - `f` - Produces the lookup future for one input
///
/// # Returns
/// - `Ok(Vec<R>)` - One result per input, in input order
/// - `Err(E)` - The first error observed
pub async fn fan_out<I, T, R, E, F, Fut>(items: I, limit: usize, mut f: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    let items: Vec<T> = items.into_iter().collect();

    let mut slots: Vec<Option<R>> = Vec::with_capacity(items.len());
    slots.resize_with(items.len(), || None);

    let mut pending = items.into_iter().enumerate();
    let mut tasks = JoinSet::new();

    for (index, item) in pending.by_ref().take(limit.max(1)) {
        let lookup = f(item);
        tasks.spawn(async move { (index, lookup.await) });
    }

    // Dropping `tasks` on an early return aborts whatever is still running
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined?;
        slots[index] = Some(result?);

        if let Some((index, item)) = pending.next() {
            let lookup = f(item);
            tasks.spawn(async move { (index, lookup.await) });
        }
    }

    Ok(slots.into_iter().flatten().collect())
}
