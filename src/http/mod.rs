//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → routing::header_rule (annotate matched paths)
//!     → page.rs (render page / health)
//!       or forward.rs (matched paths, when an upstream is configured)
//!       or 404
//!     → Send to client
//! ```

pub mod forward;
pub mod page;
pub mod request;
pub mod server;

pub use request::{request_id, X_REQUEST_ID};
pub use server::HttpServer;
