pub mod access_server;
pub mod client_ip;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use access_server::{AccessLogServer, dispatch, handle_request};
pub use client_ip::resolve_client_ip;
pub use response::{HandlerResult, Reply, into_response};
pub use router::{Resolved, Route, Router};
pub use state::AppState;
