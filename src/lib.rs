//! # async-traversal
//!
//! Asynchronous `every`, `filter`, `find`, `find_index` and `some` over slices,
//! each offered in three execution strategies.
//!
//! ## Strategies
//!
//! - **Serial** (`*_serial`): one predicate call at a time, in index order,
//!   stopping as soon as the outcome is known. The first predicate error is
//!   returned to the caller.
//! - **Concurrent** (`*_concurrent`): every predicate call is issued up front
//!   and all of them are awaited. Predicate errors count as `false`. The
//!   unsuffixed functions (`every`, `filter`, ...) are aliases of this family.
//! - **Optimized** (`*_optimized`, feature `optimized`, on by default): every
//!   call is issued up front and the operation settles as soon as the outcome
//!   is decided. The predicate returns `Result<(), E>`: `Ok` means "matches",
//!   `Err` means "does not match".
//!
//! Nothing is spawned: all predicate futures are polled inside the task that
//! awaits the operation.
//!
//! ## Quick Start
//!
//! ```rust
//! use async_traversal::prelude::*;
//! use std::convert::Infallible;
//!
//! # futures::executor::block_on(async {
//! let items = [1, 7, 3];
//! let greater_than_one = |item: &i32| {
//!     let item = *item;
//!     async move { Ok::<_, Infallible>(item > 1) }
//! };
//!
//! assert_eq!(filter(&items, greater_than_one).await, vec![&7, &3]);
//! assert_eq!(find_index_serial(&items, greater_than_one).await.unwrap(), Some(1));
//!
//! let strategy: Strategy = "serial".parse().unwrap();
//! assert_eq!(strategy.find(&items, greater_than_one).await.unwrap(), Some(&7));
//! # });
//! ```
//!
//! ## Module Organization
//!
//! - [`serial`]: sequential strategies
//! - [`concurrent`]: fan-out, wait-for-all strategies
//! - [`optimized`]: fan-out, short-circuiting strategies
//! - [`combinators`]: the future combinators the strategies are built on
//! - [`prelude`]: everything above (import with `use async_traversal::prelude::*`)

// ============================================================================
// Core Module
// ============================================================================

mod core;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

pub use crate::core::combinators;
pub use crate::core::concurrent;
#[cfg(feature = "optimized")]
pub use crate::core::optimized;
pub use crate::core::serial;

// Errors and configuration
pub use crate::core::error::{AggregateError, ParseStrategyError, Rejection, TraversalError};
pub use crate::core::strategy::Strategy;

// Serial strategies
pub use crate::core::serial::{every_serial, filter_serial, find_index_serial, find_serial, some_serial};

// Concurrent strategies
pub use crate::core::concurrent::{
    every_concurrent, filter_concurrent, find_concurrent, find_index_concurrent, settle,
    some_concurrent,
};

// Optimized strategies
#[cfg(feature = "optimized")]
pub use crate::core::optimized::{
    every_optimized, find_index_optimized, find_optimized, some_optimized, strict, StrictFuture,
};

// ============================================================================
// Default Aliases - The Concurrent Strategy
// ============================================================================

pub use crate::core::concurrent::every_concurrent as every;
pub use crate::core::concurrent::filter_concurrent as filter;
pub use crate::core::concurrent::find_concurrent as find;
pub use crate::core::concurrent::find_index_concurrent as find_index;
pub use crate::core::concurrent::some_concurrent as some;

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// Every operation, alias, the [`Strategy`] selector and the error types.
///
/// # Example
/// ```rust
/// use async_traversal::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        // Aliases
        every,
        // Concurrent
        every_concurrent,
        // Serial
        every_serial,
        filter,
        filter_concurrent,
        filter_serial,
        find,
        find_concurrent,
        find_index,
        find_index_concurrent,
        find_index_serial,
        find_serial,
        settle,
        some,
        some_concurrent,
        some_serial,
        // Errors and configuration
        AggregateError,
        ParseStrategyError,
        Rejection,
        Strategy,
        TraversalError,
    };

    #[cfg(feature = "optimized")]
    pub use super::{every_optimized, find_index_optimized, find_optimized, some_optimized, strict};
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
