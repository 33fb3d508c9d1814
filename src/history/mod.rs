//! Capacity-bounded history of analysis runs
//!
//! # Error Handling Strategy
//!
//! Every operation on [`HistoryStore`] comes in two policies:
//!
//! - **Strict** (`try_*`): returns [`StoreResult`](crate::error::StoreResult) so the caller
//!   can tell a missing record from a storage failure or a corrupt slot.
//!
//! - **Lenient** (`save`, `get_all`, `get_by_id`, `delete`, `clear`): never fails. Storage
//!   failures are logged through `tracing` and converted to `false` or an empty result. A slot
//!   that does not parse is treated exactly like an absent one.
//!
//! Writes always replace the whole collection, so a failed write leaves the previous
//! collection untouched and there is no partial state to reconcile.

pub mod ids;
pub mod preview;
pub mod store;
pub mod timestamps;

pub use ids::IdGenerator;
pub use preview::{PREVIEW_MAX_CHARS, generate_preview};
pub use store::{DEFAULT_CAPACITY, DEFAULT_HISTORY_KEY, HistoryConfig, HistoryStore};
pub use timestamps::{format_time, format_time_at, format_time_str};
