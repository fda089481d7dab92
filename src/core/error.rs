use thiserror::Error;

/// Failure of a fallible traversal.
///
/// Only the serial family (and [`Strategy`](crate::Strategy) dispatch) can fail:
/// the first predicate error stops the traversal and is reported together with
/// the index of the element that produced it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraversalError<E> {
    #[error("predicate failed at index {index}")]
    Predicate {
        index: usize,
        #[source]
        source: E,
    },
}

impl<E> TraversalError<E> {
    /// Index of the element whose predicate failed.
    pub fn index(&self) -> usize {
        match self {
            TraversalError::Predicate { index, .. } => *index,
        }
    }

    /// Unwraps the underlying predicate error.
    pub fn into_source(self) -> E {
        match self {
            TraversalError::Predicate { source, .. } => source,
        }
    }
}

/// Every future handed to [`first_ok`](crate::combinators::first_ok) failed.
///
/// The errors are kept in input order, not completion order.
#[derive(Debug, Error)]
#[error("no future succeeded ({} failed)", .errors.len())]
pub struct AggregateError<E> {
    pub errors: Vec<E>,
}

/// Negative outcome of a predicate adapted with [`strict`](crate::strict).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection<E> {
    #[error("element did not match")]
    Unmatched,

    #[error("predicate failed")]
    Failed(#[source] E),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseStrategyError {
    #[error("unknown traversal strategy: {0}")]
    Unknown(String),

    #[error("strategy {0} requires the `optimized` feature")]
    Disabled(String),
}
