pub mod combinators;
pub mod concurrent;
pub mod error;
#[cfg(feature = "optimized")]
pub mod optimized;
pub mod serial;
pub mod strategy;
