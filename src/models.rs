use super::schema::posts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Queryable, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Arguments of a "create post" request, as supplied by the caller.
#[derive(Debug)]
pub struct PostCreate {
    pub id: String,
    pub title: String,
    pub body: String,
}

#[derive(Insertable)]
#[table_name = "posts"]
pub struct PostNew<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}
