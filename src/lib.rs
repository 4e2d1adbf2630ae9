pub mod cli;
pub mod common;
pub mod config;
pub mod downloader;
