pub mod filter_service;
pub mod import_service;
pub mod inference;
pub mod viewer;
