pub mod home_page;
pub mod results_page;
