//! Small rate-limiting and resource-readout helpers
//!
//! Nothing here holds shared state: each [`Throttle`] or [`Debouncer`] is owned by its
//! caller, and time is passed in explicitly by the `*_at` variants so behaviour can be
//! driven deterministically.

pub mod memory;
pub mod rate;

pub use memory::{MemoryInfo, memory_info};
pub use rate::{DEFAULT_DELAY, Debouncer, Throttle};

/// Items in `start..end`, clamped to the list bounds
pub fn visible_items<T>(list: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(list.len());
    let start = start.min(end);
    &list[start..end]
}
