//! Stockroom: terminal admin console for a retail shop's REST backend
//!
//! Lists, creates and edits catalog, stock and order records over HTTP.
//! Every list view pages against the server and stays consistent with it
//! while the user searches, filters and runs row actions.

pub mod api;
pub mod cli;
pub mod core;
pub mod entities;
pub mod schema;
