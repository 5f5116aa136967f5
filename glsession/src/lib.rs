pub mod config;
pub mod error;
pub mod github;
pub mod resolver;
pub mod store;

pub use resolver::Resolver;
