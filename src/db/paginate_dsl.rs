use diesel::query_dsl::methods::{LimitDsl, OffsetDsl};
use juniper::GraphQLInputObject;

pub const DEFAULT_TAKE: i32 = 10;
pub const MAX_TAKE: i32 = 100;

#[derive(Debug, GraphQLInputObject)]
pub struct Pagination {
    pub take: Option<i32>,
    pub skip: Option<i32>,
}

impl Pagination {
    /// Resolved `(skip, take)`: skip is never negative, take stays within 1..=`MAX_TAKE`.
    #[must_use]
    pub fn bounds(pagination: Option<&Self>) -> (i64, i64) {
        let mut skip = 0;
        let mut take = DEFAULT_TAKE;
        if let Some(pagination) = pagination {
            skip = pagination.skip.unwrap_or(skip);
            take = pagination.take.unwrap_or(take);
        }
        (i64::from(skip.max(0)), i64::from(take.max(1).min(MAX_TAKE)))
    }
}

#[allow(clippy::module_name_repetitions)]
pub trait PaginateDsl {
    type Output;
    fn paginate(self, pagination: Option<Pagination>) -> Self::Output;
}

impl<T> PaginateDsl for T
where
    T: OffsetDsl,
    T::Output: LimitDsl,
{
    type Output = <T::Output as LimitDsl>::Output;
    fn paginate(self, pagination: Option<Pagination>) -> Self::Output {
        let (skip, take) = Pagination::bounds(pagination.as_ref());
        self.offset(skip).limit(take)
    }
}
