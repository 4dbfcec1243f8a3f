use serde::{Deserialize, Serialize};

/// Author record as served by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
    pub published: i64,
    pub liked_by_me: bool,
    #[serde(default)]
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    pub published: i64,
    pub liked_by_me: bool,
    #[serde(default)]
    pub likes: i64,
}

/// A post paired with its comments, in server response order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// A post paired with its resolved author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}

/// Final pipeline output for one post. Comment authors stay unresolved; only
/// the post's own author is fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithCommentsAndAuthors {
    pub post: PostWithAuthor,
    pub comments: Vec<Comment>,
}
