//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span, feed body decoding)
//!     → handlers.rs (load / search / health)
//!     → service layer
//!     → response.rs (error → status code mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use handlers::{LOAD_ROUTE, SEARCH_ROUTE};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
