pub mod config;
pub mod epg;
pub mod errors;
pub mod models;
pub mod parser;
pub mod proxy;
pub mod services;
pub mod web;
