use crate::core::concurrent::{
    every_concurrent, filter_concurrent, find_concurrent, find_index_concurrent, some_concurrent,
};
use crate::core::error::{ParseStrategyError, TraversalError};
#[cfg(feature = "optimized")]
use crate::core::optimized::{
    every_optimized, find_index_optimized, find_optimized, some_optimized, strict,
};
use crate::core::serial::{every_serial, filter_serial, find_index_serial, find_serial, some_serial};
use std::fmt;
use std::future::Future;
use std::str::FromStr;

/// Runtime choice of traversal strategy.
///
/// Every dispatch method takes the ordinary `Result<bool, E>` predicate, so the
/// same predicate can be run under any strategy:
/// - [`Strategy::Serial`] forwards predicate errors as [`TraversalError`]
/// - [`Strategy::Concurrent`] counts them as `false` and always returns `Ok`
/// - [`Strategy::Optimized`] runs the predicate through [`strict`] and always
///   returns `Ok`; `filter` has no optimized form and runs concurrently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    Serial,
    #[default]
    Concurrent,
    #[cfg(feature = "optimized")]
    Optimized,
}

impl Strategy {
    /// Every strategy compiled into this build.
    #[cfg(feature = "optimized")]
    pub const ALL: &'static [Strategy] =
        &[Strategy::Serial, Strategy::Concurrent, Strategy::Optimized];
    #[cfg(not(feature = "optimized"))]
    pub const ALL: &'static [Strategy] = &[Strategy::Serial, Strategy::Concurrent];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Serial => "serial",
            Strategy::Concurrent => "concurrent",
            #[cfg(feature = "optimized")]
            Strategy::Optimized => "optimized",
        }
    }

    pub async fn every<'a, T, F, Fut, E>(
        self,
        items: &'a [T],
        predicate: F,
    ) -> Result<bool, TraversalError<E>>
    where
        F: FnMut(&'a T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        match self {
            Strategy::Serial => every_serial(items, predicate).await,
            Strategy::Concurrent => Ok(every_concurrent(items, predicate).await),
            #[cfg(feature = "optimized")]
            Strategy::Optimized => Ok(every_optimized(items, strict(predicate)).await),
        }
    }

    pub async fn filter<'a, T, F, Fut, E>(
        self,
        items: &'a [T],
        predicate: F,
    ) -> Result<Vec<&'a T>, TraversalError<E>>
    where
        F: FnMut(&'a T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        match self {
            Strategy::Serial => filter_serial(items, predicate).await,
            Strategy::Concurrent => Ok(filter_concurrent(items, predicate).await),
            #[cfg(feature = "optimized")]
            Strategy::Optimized => {
                log::debug!("filter has no optimized form, running it concurrently");
                Ok(filter_concurrent(items, predicate).await)
            }
        }
    }

    pub async fn find<'a, T, F, Fut, E>(
        self,
        items: &'a [T],
        predicate: F,
    ) -> Result<Option<&'a T>, TraversalError<E>>
    where
        F: FnMut(&'a T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        match self {
            Strategy::Serial => find_serial(items, predicate).await,
            Strategy::Concurrent => Ok(find_concurrent(items, predicate).await),
            #[cfg(feature = "optimized")]
            Strategy::Optimized => Ok(find_optimized(items, strict(predicate)).await),
        }
    }

    pub async fn find_index<'a, T, F, Fut, E>(
        self,
        items: &'a [T],
        predicate: F,
    ) -> Result<Option<usize>, TraversalError<E>>
    where
        F: FnMut(&'a T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        match self {
            Strategy::Serial => find_index_serial(items, predicate).await,
            Strategy::Concurrent => Ok(find_index_concurrent(items, predicate).await),
            #[cfg(feature = "optimized")]
            Strategy::Optimized => Ok(find_index_optimized(items, strict(predicate)).await),
        }
    }

    pub async fn some<'a, T, F, Fut, E>(
        self,
        items: &'a [T],
        predicate: F,
    ) -> Result<bool, TraversalError<E>>
    where
        F: FnMut(&'a T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        match self {
            Strategy::Serial => some_serial(items, predicate).await,
            Strategy::Concurrent => Ok(some_concurrent(items, predicate).await),
            #[cfg(feature = "optimized")]
            Strategy::Optimized => Ok(some_optimized(items, strict(predicate)).await),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Parses `serial`, `concurrent` or `optimized`, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serial" => Ok(Strategy::Serial),
            "concurrent" => Ok(Strategy::Concurrent),
            #[cfg(feature = "optimized")]
            "optimized" => Ok(Strategy::Optimized),
            #[cfg(not(feature = "optimized"))]
            "optimized" => Err(ParseStrategyError::Disabled(s.trim().to_string())),
            _ => Err(ParseStrategyError::Unknown(s.to_string())),
        }
    }
}
