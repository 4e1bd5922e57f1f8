mod item;
mod message;

pub use item::{ResultItem, ResultMeta};
pub use message::{ERROR_ID, LOADING_ID, SyntheticMessage, SyntheticMessages, is_synthetic_id};
