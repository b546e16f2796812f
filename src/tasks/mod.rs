//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - Evictor: Removes expired cache entries at a fixed interval

mod evictor;

pub use evictor::{spawn_evictor, sweep};
