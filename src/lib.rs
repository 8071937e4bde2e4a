//! Typed client for Instagram's private mobile API.
//!
//! Each endpoint is a request descriptor built by a function in
//! [`requests`], executed by [`client::InstagramClient`], and parsed into
//! the typed result structs in [`models`]. The [`operations`] module wraps
//! client calls for the CLI.

pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod operations;
pub mod requests;
