pub mod aggregate;
pub mod bridge;
pub mod client;
pub mod decode;

pub use crate::domain::model::{
    Author, Comment, Post, PostWithAuthor, PostWithComments, PostWithCommentsAndAuthors,
};
pub use crate::domain::ports::{ConfigProvider, FeedApi, Transport};
pub use crate::utils::error::Result;
