//! An asynchronous Rust client for the Devcade games API.
//!
//! This crate provides a convenient, asynchronous interface for the games
//! service: uploading game archives, browsing the catalog, and downloading
//! stored archives. It handles request assembly, error handling, and file
//! streaming, allowing you to focus on your application's core logic.
//!
//! ## Features
//! - Streamed multipart upload of game archives.
//! - Catalog queries for stored game records.
//! - Archive download and replacement helpers.
//! - Typed error handling for robust applications.

pub mod client;
pub mod error;
pub mod types;

pub use client::DevcadeClient;
pub use error::DevcadeError;
pub use types::Game;
