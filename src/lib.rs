pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod entity;
pub mod error;
pub mod models;
pub mod nav;
pub mod notify;
pub mod session;
