//! Before-filters: global hooks that run ahead of every matched handler.

mod core;
mod request_id;

pub use core::{BeforeFilter, FilterChain};
pub use request_id::{RequestIdFilter, REQUEST_ID_HEADER};
