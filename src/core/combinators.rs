//! Future combinators the traversal strategies are built on.
//!
//! All of them poll their futures inside the calling task; nothing is spawned.
//! - [`all_settled`] waits for every future and keeps every outcome
//! - [`all_ok`] waits for every success, or stops at the first failure
//! - [`first_ok`] stops at the first success, or collects every failure

use crate::core::error::AggregateError;
use futures::FutureExt;
use futures::stream::{FuturesOrdered, FuturesUnordered, StreamExt};
use std::future::Future;

/// Drives every future to completion and returns their outputs in input order,
/// regardless of the order in which they finished.
pub async fn all_settled<I>(futures: I) -> Vec<<I::Item as Future>::Output>
where
    I: IntoIterator,
    I::Item: Future,
{
    let futures_ordered: FuturesOrdered<_> = futures.into_iter().collect();
    futures_ordered.collect().await
}

/// Drives every future until all have succeeded or one has failed.
///
/// The first error to settle (in completion order) is returned and the
/// remaining futures are dropped. On success the values are in input order.
pub async fn all_ok<I, V, E>(futures: I) -> Result<Vec<V>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<V, E>>,
{
    let mut pending: FuturesUnordered<_> = futures
        .into_iter()
        .enumerate()
        .map(|(index, fut)| fut.map(move |outcome| (index, outcome)))
        .collect();

    let mut slots: Vec<Option<V>> = std::iter::repeat_with(|| None).take(pending.len()).collect();
    while let Some((index, outcome)) = pending.next().await {
        slots[index] = Some(outcome?);
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Drives every future until one succeeds, returning that value.
///
/// The winner is the first success in completion order, not the lowest index.
/// When every future fails, all errors are returned in input order. An empty
/// input fails with an empty [`AggregateError`].
pub async fn first_ok<I, V, E>(futures: I) -> Result<V, AggregateError<E>>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<V, E>>,
{
    let mut pending: FuturesUnordered<_> = futures
        .into_iter()
        .enumerate()
        .map(|(index, fut)| fut.map(move |outcome| (index, outcome)))
        .collect();

    let mut failures: Vec<(usize, E)> = Vec::with_capacity(pending.len());
    while let Some((index, outcome)) = pending.next().await {
        match outcome {
            Ok(value) => return Ok(value),
            Err(error) => failures.push((index, error)),
        }
    }

    failures.sort_by_key(|(index, _)| *index);
    Err(AggregateError {
        errors: failures.into_iter().map(|(_, error)| error).collect(),
    })
}
