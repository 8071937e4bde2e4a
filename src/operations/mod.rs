//! Operations module provides CLI-facing wrappers around the client

pub mod comment;
pub mod comments;
pub mod upload;
