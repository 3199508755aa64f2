//! Request dispatch
//!
//! Resolves a request target to one of a fixed set of routes and runs the
//! matching handler. The files root is the only state and is injected when
//! the router is built.

pub mod dispatch;
pub mod files;
pub mod route;

pub use dispatch::Router;
pub use files::FileStore;
pub use route::Route;
