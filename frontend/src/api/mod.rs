pub mod documents_api;
