pub mod search_form;
pub mod toggle_row;
