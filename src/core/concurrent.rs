//! Concurrent strategies: fan out every predicate call, then wait for all of them.
//!
//! The predicate is invoked on every element before any outcome is awaited, and
//! the result is computed from the settled outcomes in index order. A failing
//! predicate never aborts the others and never reaches the caller: it counts as
//! `false` for its element. These functions are the targets of the crate's
//! default aliases (`every`, `filter`, `find`, `find_index`, `some`).

use crate::core::combinators::all_settled;
use std::future::Future;

/// Invokes the predicate on every element and returns each settlement,
/// positionally aligned with `items`.
pub async fn settle<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> Vec<Result<bool, E>>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let futures: Vec<Fut> = items.iter().map(predicate).collect();
    all_settled(futures).await
}

/// Settles every predicate and collapses each outcome to a plain bool.
async fn outcomes<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> Vec<bool>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    settle(items, predicate)
        .await
        .into_iter()
        .enumerate()
        .map(|(index, settlement)| match settlement {
            Ok(outcome) => outcome,
            Err(_) => {
                log::debug!("predicate failed at index {}, counting it as false", index);
                false
            }
        })
        .collect()
}

/// `true` unless some predicate resolved to `false`. Failures count as `false`.
pub async fn every_concurrent<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> bool
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    outcomes(items, predicate).await.into_iter().all(|outcome| outcome)
}

/// The elements whose predicate resolved to `true`, in their original order.
pub async fn filter_concurrent<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> Vec<&'a T>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    items
        .iter()
        .zip(outcomes(items, predicate).await)
        .filter_map(|(item, outcome)| outcome.then_some(item))
        .collect()
}

/// The lowest-index element whose predicate resolved to `true`.
pub async fn find_concurrent<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> Option<&'a T>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    find_index_concurrent(items, predicate)
        .await
        .map(|index| &items[index])
}

/// Index of the lowest-index element whose predicate resolved to `true`.
pub async fn find_index_concurrent<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> Option<usize>
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    outcomes(items, predicate)
        .await
        .into_iter()
        .position(|outcome| outcome)
}

/// `true` if any predicate resolved to `true`.
pub async fn some_concurrent<'a, T, F, Fut, E>(items: &'a [T], predicate: F) -> bool
where
    F: FnMut(&'a T) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    outcomes(items, predicate).await.into_iter().any(|outcome| outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;
    use tokio::time::sleep;

    const ARRAY: [i32; 3] = [1, 7, 3];

    async fn greater_than_one(item: &i32) -> Result<bool, String> {
        Ok(*item > 1)
    }

    #[tokio::test]
    async fn test_concurrent_scenario() {
        assert!(!every_concurrent(&ARRAY, greater_than_one).await);
        assert_eq!(filter_concurrent(&ARRAY, greater_than_one).await, vec![&7, &3]);
        assert_eq!(find_concurrent(&ARRAY, greater_than_one).await, Some(&7));
        assert_eq!(find_index_concurrent(&ARRAY, greater_than_one).await, Some(1));
        assert!(some_concurrent(&ARRAY, greater_than_one).await);
    }

    #[tokio::test]
    async fn test_concurrent_empty_input() {
        let empty: [i32; 0] = [];
        assert!(every_concurrent(&empty, greater_than_one).await);
        assert!(filter_concurrent(&empty, greater_than_one).await.is_empty());
        assert_eq!(find_concurrent(&empty, greater_than_one).await, None);
        assert_eq!(find_index_concurrent(&empty, greater_than_one).await, None);
        assert!(!some_concurrent(&empty, greater_than_one).await);
    }

    #[tokio::test]
    async fn test_concurrent_invokes_every_element() {
        let calls = Cell::new(0);
        let found = some_concurrent(&[9, 1, 2, 3], |item| {
            calls.set(calls.get() + 1);
            async move { Ok::<_, String>(*item > 5) }
        })
        .await;
        assert!(found);
        assert_eq!(calls.get(), 4);

        calls.set(0);
        let all = every_concurrent(&[0, 1, 2], |item| {
            calls.set(calls.get() + 1);
            async move { Ok::<_, String>(*item > 0) }
        })
        .await;
        assert!(!all);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_starts_every_call_before_any_finishes() {
        let log = RefCell::new(Vec::new());
        let kept = filter_concurrent(&[20u64, 1, 10], |ms| {
            let log = &log;
            async move {
                log.borrow_mut().push(format!("start {ms}"));
                sleep(Duration::from_millis(*ms)).await;
                log.borrow_mut().push(format!("end {ms}"));
                Ok::<_, String>(true)
            }
        })
        .await;

        assert_eq!(kept, vec![&20, &1, &10]);
        let log = log.into_inner();
        assert_eq!(&log[..3], ["start 20", "start 1", "start 10"]);
        assert_eq!(&log[3..], ["end 1", "end 10", "end 20"]);
    }

    #[tokio::test]
    async fn test_concurrent_find_prefers_lowest_index_over_first_to_settle() {
        let found = find_index_concurrent(&[40u64, 5, 1], |ms| async move {
            sleep(Duration::from_millis(*ms)).await;
            Ok::<_, String>(*ms > 2)
        })
        .await;
        assert_eq!(found, Some(0));
    }

    #[tokio::test]
    async fn test_concurrent_failures_count_as_false() {
        let predicate = |item: &i32| {
            let item = *item;
            async move {
                if item < 0 {
                    Err(format!("negative: {item}"))
                } else {
                    Ok(item > 1)
                }
            }
        };
        let items = [-5, 7, -3, 4];

        assert!(!every_concurrent(&items, predicate).await);
        assert_eq!(filter_concurrent(&items, predicate).await, vec![&7, &4]);
        assert_eq!(find_concurrent(&items, predicate).await, Some(&7));
        assert_eq!(find_index_concurrent(&items, predicate).await, Some(1));
        assert!(some_concurrent(&items, predicate).await);
        assert!(!some_concurrent(&[-1, -2], predicate).await);
    }

    #[tokio::test]
    async fn test_settle_keeps_positions() {
        let settled = settle(&[3, -1, 0], |item| {
            let item = *item;
            async move {
                if item < 0 { Err("negative") } else { Ok(item > 0) }
            }
        })
        .await;
        assert_eq!(settled, vec![Ok(true), Err("negative"), Ok(false)]);
    }
}
