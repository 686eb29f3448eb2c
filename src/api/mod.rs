pub mod models;
pub mod routes;
pub mod routes_diagnostics;
