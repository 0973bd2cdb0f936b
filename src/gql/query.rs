use super::Context;
use crate::db::paginate_dsl::Pagination;
use crate::models;
use crate::posts::{self, PostError};
use juniper::{graphql_object, FieldResult, IntoFieldError, ID};

#[allow(clippy::module_name_repetitions)]
pub struct RootQuery;

#[graphql_object(context = Context)]
impl RootQuery {
    fn api_version() -> &'static str {
        "1.0"
    }

    fn post(context: &Context, id: ID) -> FieldResult<models::Post> {
        let conn = context.pool.get()?;
        posts::find_post(&conn, &id).map_err(PostError::into_field_error)
    }

    fn posts(context: &Context, pagination: Option<Pagination>) -> FieldResult<Vec<models::Post>> {
        let conn = context.pool.get()?;
        posts::list_posts(&conn, pagination).map_err(PostError::into_field_error)
    }
}

#[graphql_object(
    description = "A blog post",
    context = Context,
)]
impl models::Post {
    fn id(&self) -> ID {
        ID::from(self.id.clone())
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn body(&self) -> &str {
        &self.body
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn updated_at(&self) -> &str {
        &self.updated_at
    }
}
