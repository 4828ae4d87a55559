#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]

//! State core shared by the Holocron web app and CLI: models, the request
//! wrapper and its lifecycle, reducers, durable storage and configuration.

pub mod actions;
pub mod config;
pub mod lifecycle;
pub mod models;
pub mod request;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testing;
