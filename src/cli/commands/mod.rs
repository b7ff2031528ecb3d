pub mod auth;
pub mod dashboard;
pub mod entity;
pub mod routes;
