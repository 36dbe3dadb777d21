//! Filtered, sorted and paginated list queries shared by every list endpoint.

pub mod filter;
pub mod pagination;
pub mod sort;

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

pub use filter::{Filter, FilterError, build_condition};
pub use pagination::{ListEnvelope, Page, PageParams};
pub use sort::{SortDirection, SortSpec, resolve_sort};

/// What a model exposes to list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ListSpec<C: 'static> {
    pub filters: &'static [Filter<C>],
    /// API field name → column, for `sortBy`.
    pub sortable: &'static [(&'static str, C)],
    /// Column sorted descending when no usable `sortBy` is given.
    pub default_sort: C,
}

/// A parsed list request, ready to be applied to a `Select`.
#[derive(Debug, Clone)]
pub struct ListQuery<C> {
    pub condition: Condition,
    pub sort: SortSpec<C>,
    pub page: PageParams,
}

impl<C> ListQuery<C>
where
    C: ColumnTrait + Copy + 'static,
{
    pub fn parse(params: &HashMap<String, String>, spec: &ListSpec<C>) -> Result<Self, FilterError> {
        Ok(Self {
            condition: build_condition(params, spec.filters)?,
            sort: resolve_sort(
                params.get("sortBy").map(String::as_str),
                spec.sortable,
                spec.default_sort,
            ),
            page: PageParams::from_query(params),
        })
    }

    /// Add a constraint the caller cannot lift (e.g. "only my bookings").
    pub fn scoped(mut self, extra: impl sea_orm::sea_query::IntoCondition) -> Self {
        self.condition = self.condition.add(extra.into_condition());
        self
    }

    /// Filter, order and window `select`.
    pub fn apply<E>(&self, select: Select<E>) -> Select<E>
    where
        E: EntityTrait<Column = C>,
    {
        select
            .filter(self.condition.clone())
            .order_by(self.sort.column, self.sort.direction.into())
            .offset(self.page.skip())
            .limit(self.page.limit)
    }

    /// Count the filtered rows, then load the requested page.
    pub async fn fetch<E>(&self, db: &DatabaseConnection, select: Select<E>) -> Result<Page<E::Model>, DbErr>
    where
        E: EntityTrait<Column = C>,
        E::Model: Sync,
    {
        let total = select.clone().filter(self.condition.clone()).count(db).await?;
        let items = self.apply(select).all(db).await?;

        Ok(Page {
            items,
            total,
            params: self.page,
        })
    }
}
