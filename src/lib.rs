pub mod config;
pub mod domain;
pub mod error;
pub mod oauth;
pub mod service;
pub mod util;
