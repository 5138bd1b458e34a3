pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod services;


pub use client::{Client, Response};
pub use config::Config;
pub use context::Context;
pub use error::{Error, Result};
