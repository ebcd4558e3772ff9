//! HTTP surface: the landing page and the `/api/nope` proxy.

pub mod routes;
pub mod server;
pub mod state;

pub use server::{router, serve};
pub use state::WebState;
