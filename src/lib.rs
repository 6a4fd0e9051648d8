//! アブノーマリティ図鑑 CLIクライアント

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod store;
