pub mod catalogue;
pub mod completion;
pub mod config;
pub mod contacts;
pub mod session;
