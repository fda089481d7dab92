//! Serial strategies: one predicate call at a time, strictly in index order.
//!
//! Each call is awaited before the next one is issued, and the traversal stops
//! as soon as its outcome is decided. Predicates for elements past that point
//! are never invoked, which makes this family the right choice for predicates
//! with ordering-sensitive side effects. The first predicate error ends the
//! traversal and is returned as [`TraversalError::Predicate`].

use crate::core::error::TraversalError;
use std::future::Future;

/// Index of the first element whose outcome equals `wanted`.
async fn position<'a, T, F, Fut, E>(
    items: &'a [T],
    mut predicate: F,
    wanted: bool,
) -> Result<Option<usize>, TraversalError<E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    for (index, item) in items.iter().enumerate() {
        let outcome = predicate(item)
            .await
            .map_err(|source| TraversalError::Predicate { index, source })?;
        if outcome == wanted {
            log::trace!(
                "serial traversal stopped at index {} of {}",
                index,
                items.len()
            );
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// `true` if every element satisfies the predicate. Stops at the first `false`.
pub async fn every_serial<'a, T, F, Fut, E>(
    items: &'a [T],
    predicate: F,
) -> Result<bool, TraversalError<E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    Ok(position(items, predicate, false).await?.is_none())
}

/// The elements that satisfy the predicate, in their original order.
/// Every element is visited unless a predicate fails.
pub async fn filter_serial<'a, T, F, Fut, E>(
    items: &'a [T],
    mut predicate: F,
) -> Result<Vec<&'a T>, TraversalError<E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let mut kept = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item)
            .await
            .map_err(|source| TraversalError::Predicate { index, source })?
        {
            kept.push(item);
        }
    }
    Ok(kept)
}

/// The first element that satisfies the predicate.
pub async fn find_serial<'a, T, F, Fut, E>(
    items: &'a [T],
    predicate: F,
) -> Result<Option<&'a T>, TraversalError<E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    Ok(position(items, predicate, true).await?.map(|index| &items[index]))
}

/// Index of the first element that satisfies the predicate.
pub async fn find_index_serial<'a, T, F, Fut, E>(
    items: &'a [T],
    predicate: F,
) -> Result<Option<usize>, TraversalError<E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    position(items, predicate, true).await
}

/// `true` if any element satisfies the predicate. Stops at the first `true`.
pub async fn some_serial<'a, T, F, Fut, E>(
    items: &'a [T],
    predicate: F,
) -> Result<bool, TraversalError<E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    Ok(position(items, predicate, true).await?.is_some())
}
