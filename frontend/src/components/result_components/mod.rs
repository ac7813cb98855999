pub mod results_view;
pub mod result_card;
