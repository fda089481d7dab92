//! Runs the same lookups under every traversal strategy and prints what each
//! one did.
//!
//! This demo shows:
//! - Serial traversal stopping at the first decisive element
//! - Concurrent traversal issuing every call and absorbing failures
//! - Optimized traversal settling on the first call to finish
//! - Picking a strategy at runtime from a string

use async_traversal::prelude::*;
use std::cell::RefCell;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("lookup for {0} timed out")]
struct LookupError(u64);

// ============================================================================
// A slow, occasionally failing predicate
// ============================================================================

/// Pretends to look an id up remotely: the id doubles as its latency in
/// milliseconds, ids divisible by 7 fail, and even ids are "present".
async fn is_present(id: &u64, calls: &RefCell<Vec<u64>>) -> Result<bool, LookupError> {
    calls.borrow_mut().push(*id);
    tokio::time::sleep(Duration::from_millis(*id)).await;
    if id % 7 == 0 {
        return Err(LookupError(*id));
    }
    Ok(id % 2 == 0)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== async-traversal strategies ===\n");

    let ids: Vec<u64> = vec![45, 21, 30, 12, 5];
    let calls = RefCell::new(Vec::new());

    for name in ["serial", "concurrent", "optimized"] {
        let strategy: Strategy = match name.parse() {
            Ok(strategy) => strategy,
            Err(err) => {
                println!("--- {name}: skipped ({err}) ---\n");
                continue;
            }
        };

        calls.borrow_mut().clear();
        let started = Instant::now();
        let found = strategy.find(&ids, |id| is_present(id, &calls)).await;
        let elapsed = started.elapsed();

        println!("--- {strategy} ---");
        match found {
            Ok(found) => println!("  find      -> {found:?}"),
            Err(err) => println!("  find      -> error: {err}"),
        }
        println!("  called on -> {:?}", calls.borrow());
        println!("  took      -> {} ms\n", elapsed.as_millis());
    }

    let kept = filter(&ids, |id| is_present(id, &calls)).await;
    println!("filter (default alias) -> {kept:?}");

    println!("\n=== done ===");
}
