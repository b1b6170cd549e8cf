//! JSON-RPC API Layer
//!
//! Exposes the question/answer use cases as JSON-RPC 2.0 methods and maps
//! the core error kinds onto RPC error codes.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use handler::RpcHandler;
pub use server::{RpcServer, RpcServerConfig};
