//! Debounced search provider bridging host search UIs to pluggable backends.
//!
//! The root module re-exports the coordinator and the shared result model so
//! that embedders can wire a provider without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod coordinator;
pub mod host;
pub mod launcher;
pub mod logging;

pub use coordinator::{
	CoordinatorBuilder, CoordinatorConfig, CoordinatorError, MissingMetaPolicy, PrefixFilter,
	RelevanceFilter, RequestToken, SearchCoordinator, SessionPhase,
};
pub use host::ProviderSlot;
pub use launcher::{SystemLauncher, UriLauncher};

pub use sift_provider_api::{
	BackendClient, BackendError, ERROR_ID, LOADING_ID, ResultItem, ResultMeta, ResultSink,
};
