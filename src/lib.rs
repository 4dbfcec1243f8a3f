pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpTransport;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{aggregate::Aggregator, client::ApiClient};
pub use crate::domain::model::{
    Author, Comment, Post, PostWithAuthor, PostWithComments, PostWithCommentsAndAuthors,
};
pub use crate::domain::ports::{ConfigProvider, FeedApi, Transport};
pub use crate::utils::error::{FeedError, Result};
