pub mod analysis;
pub mod config;
pub mod document;
pub mod errors;
pub mod preprocess;
pub mod routes;
pub mod state;
