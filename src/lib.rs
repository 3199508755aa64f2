//! framehttp - HTTP/1.1 from raw bytes
//!
//! Request parsing, routing, gzip negotiation and response framing over
//! plain TCP.

pub mod cli;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
