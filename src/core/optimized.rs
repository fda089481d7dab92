//! Optimized strategies: fan out every predicate call and race them.
//!
//! These functions assume a narrower predicate contract than the rest of the
//! crate: `Ok(())` means the element matches and `Err(_)` means it does not.
//! The error channel is the negative signal, so a legitimate "no" cannot be
//! told apart from an unexpected failure. In exchange, each operation settles
//! as soon as its outcome is decided and drops the predicate futures still in
//! flight.
//!
//! `find_optimized` and `find_index_optimized` return the first match *to
//! settle*, which is not necessarily the lowest-index match. There is no
//! optimized `filter`: it has to wait for every element anyway.
//!
//! Use [`strict`] to run a `Result<bool, E>` predicate under this contract.

use crate::core::combinators::{all_ok, first_ok};
use crate::core::error::Rejection;
use futures::future::{FutureExt, Map, TryFutureExt};
use std::future::Future;

/// Future returned by a predicate adapted with [`strict`].
pub type StrictFuture<Fut, E> = Map<Fut, fn(Result<bool, E>) -> Result<(), Rejection<E>>>;

fn verdict<E>(outcome: Result<bool, E>) -> Result<(), Rejection<E>> {
    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => Err(Rejection::Unmatched),
        Err(error) => Err(Rejection::Failed(error)),
    }
}

/// Adapts a `Result<bool, E>` predicate to the optimized contract.
///
/// `Ok(true)` becomes `Ok(())`, `Ok(false)` becomes [`Rejection::Unmatched`]
/// and an error becomes [`Rejection::Failed`].
pub fn strict<'a, T, F, Fut, E>(mut predicate: F) -> impl FnMut(&'a T) -> StrictFuture<Fut, E>
where
    T: 'a,
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    move |item| predicate(item).map(verdict::<E> as fn(_) -> _)
}

/// `true` once every predicate has succeeded; `false` as soon as one fails.
pub async fn every_optimized<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> bool
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let futures: Vec<Fut> = items.iter().map(predicate).collect();
    match all_ok(futures).await {
        Ok(_) => true,
        Err(_) => {
            log::trace!("optimized every settled early on a failed predicate");
            false
        }
    }
}

/// The element of the first predicate to succeed, in completion order.
pub async fn find_optimized<'a, T, F, Fut, E>(items: &'a [T], mut predicate: F) -> Option<&'a T>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let racing = items
        .iter()
        .map(|item| predicate(item).map_ok(move |()| item));
    match first_ok(racing).await {
        Ok(item) => Some(item),
        Err(aggregate) => {
            log::debug!("optimized find: all {} predicates failed", aggregate.errors.len());
            None
        }
    }
}

/// The index of the first predicate to succeed, in completion order.
pub async fn find_index_optimized<'a, T, F, Fut, E>(items: &'a [T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let racing = items
        .iter()
        .enumerate()
        .map(|(index, item)| predicate(item).map_ok(move |()| index));
    match first_ok(racing).await {
        Ok(index) => Some(index),
        Err(aggregate) => {
            log::debug!("optimized find_index: all {} predicates failed", aggregate.errors.len());
            None
        }
    }
}

/// `true` as soon as one predicate succeeds; `false` once all have failed.
pub async fn some_optimized<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> bool
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let futures: Vec<Fut> = items.iter().map(predicate).collect();
    first_ok(futures).await.is_ok()
}
