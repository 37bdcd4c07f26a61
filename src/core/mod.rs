//! Core types shared across the build: URL paths, link classification,
//! the route table, and process-wide shutdown state.

pub mod link;
pub mod routes;
mod shutdown;
pub mod url;

pub use link::LinkKind;
pub use routes::{ResolveResult, RouteTable};
pub use shutdown::{is_shutdown, setup_shutdown_handler};
pub use url::UrlPath;
