use juniper::{graphql_object, FieldResult, IntoFieldError, ID};

use super::Context;
use crate::models::{Post, PostCreate};
use crate::posts::{self, PostError};

#[allow(clippy::module_name_repetitions)]
pub struct RootMutation;

#[graphql_object(context = Context)]
impl RootMutation {
    fn create_post(context: &Context, id: ID, title: String, body: String) -> FieldResult<Post> {
        let conn = context.pool.get()?;
        let create = PostCreate {
            id: id.to_string(),
            title,
            body,
        };
        posts::create_post(&conn, &create).map_err(PostError::into_field_error)
    }
}
