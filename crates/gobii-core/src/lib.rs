//! # gobii-core
//!
//! Data types exchanged with the Gobii asynchronous task API.
//!
//! - [`TaskRecord`]: the single shape used for both submission payloads and
//!   server responses. Every field is optional because the service may omit
//!   any of them on partial state.
//! - [`TaskStatus`]: the closed set of lifecycle states reported by the service.
//!
//! The wire format is JSON with `snake_case` keys. See [`task::FIELD_MAP`] for
//! the camelCase names used by the API documentation.

pub mod status;
pub mod task;

pub use status::TaskStatus;
pub use task::TaskRecord;
