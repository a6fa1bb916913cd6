pub mod adapter;
pub mod api;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod error;
pub mod fetch;
pub mod fixtures;
pub mod formatting;
pub mod model;
pub mod request;
pub mod roster;
pub mod season;
pub mod standings;
pub mod summary;
pub mod view;

#[cfg(any(test, feature = "development"))]
pub mod dev;

pub use api::{Client, ClientSettings};
pub use data_provider::DataProvider;
pub use error::{AdapterError, NhlError, TransportError};
