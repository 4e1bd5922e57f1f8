//! Shared interfaces between the sift search coordinator and its backends.
//!
//! Backends implement [`BackendClient`] and hand back normalized
//! [`ResultItem`]s. The coordinator owns everything else: debouncing, request
//! sequencing, caching and the host-facing provider contract. Hosts receive
//! result identifiers through a [`ResultSink`] and resolve them into
//! [`ResultMeta`] rows afterwards.

pub mod backend;
pub mod error;
pub mod sink;
pub mod types;

pub use backend::{BackendClient, IdSequence};
pub use error::BackendError;
pub use sink::ResultSink;
pub use types::{
	ERROR_ID, LOADING_ID, ResultItem, ResultMeta, SyntheticMessage, SyntheticMessages,
	is_synthetic_id,
};
