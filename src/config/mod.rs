//! Configuration modules.
//!
//! Each submodule loads one concern from environment variables:
//!
//! - [`cors`]: allowed CORS origins
//! - [`server`]: bind address and bcrypt cost
//! - [`store`]: document store path

pub mod cors;
pub mod server;
pub mod store;
