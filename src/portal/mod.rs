pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod server;
pub mod templates;

pub use server::Server;
