use chrono::prelude::*;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::paginate_dsl::{PaginateDsl, Pagination};
use crate::models::{Post, PostCreate, PostNew};

pub mod error;

pub use error::PostError;

/// Insert a post with the caller's id, title and body, returning the stored row.
///
/// # Errors
///
/// Will return `PostError::WriteFailed` if the insert fails, e.g. on a duplicate id
pub fn create_post(conn: &SqliteConnection, create: &PostCreate) -> Result<Post, PostError> {
    use crate::schema::posts;

    let now = Utc::now().to_rfc3339();
    conn.transaction(|| {
        diesel::insert_into(posts::table)
            .values(PostNew {
                id: &create.id,
                title: &create.title,
                body: &create.body,
                created_at: &now,
                updated_at: &now,
            })
            .execute(conn)?;
        posts::table.find(&create.id).first::<Post>(conn)
    })
    .map_err(PostError::WriteFailed)
}

/// # Errors
///
/// Will return `PostError::NotFound` when no post has the given id
pub fn find_post(conn: &SqliteConnection, post_id: &str) -> Result<Post, PostError> {
    use crate::schema::posts::dsl::posts;

    let post = posts
        .find(post_id)
        .first::<Post>(conn)
        .optional()
        .map_err(PostError::ReadFailed)?
        .ok_or_else(|| PostError::NotFound {
            id: String::from(post_id),
        })?;
    log::info!("post created.");
    Ok(post)
}

/// Newest posts first.
///
/// # Errors
///
/// Will return `PostError::ReadFailed` for any database error
pub fn list_posts(
    conn: &SqliteConnection,
    pagination: Option<Pagination>,
) -> Result<Vec<Post>, PostError> {
    use crate::schema::posts::dsl::{created_at, id, posts};

    posts
        .into_boxed()
        .order((created_at.desc(), id.asc()))
        .paginate(pagination)
        .load::<Post>(conn)
        .map_err(PostError::ReadFailed)
}
