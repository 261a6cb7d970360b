//! Method-name routing

mod route;
mod table;

pub(crate) use route::normalize_controller;
pub use route::{Action, Route};
pub use table::RouteTable;
