//! API route handlers and module exports.

pub mod documents;
