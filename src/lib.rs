// src/lib.rs

pub mod catalog;
pub mod config;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod state;

pub use pagination::{PaginatedList, PaginationState, PaginationSummary};
pub use response::{ResponseEnvelope, build_response};
