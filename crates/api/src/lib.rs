//! HTTP surface for the valuation engine: sample CRUD (the admin
//! surface) and the valuation endpoints, over a shared injected store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
