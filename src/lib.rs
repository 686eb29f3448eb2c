pub mod api;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod db;
