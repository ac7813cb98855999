//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod field_toggle;
pub mod search_request;
pub mod search_outcome;
pub mod search_const;
