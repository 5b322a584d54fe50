//! Core configuration and data model types

pub mod config;
pub mod models;
