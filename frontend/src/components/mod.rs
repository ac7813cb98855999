pub mod error_boundary;
pub mod suspend_boundary;
pub mod page_header;
pub mod form_components;
pub mod result_components;
