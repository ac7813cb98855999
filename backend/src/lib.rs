//! Backend library entry point.

pub mod api;
