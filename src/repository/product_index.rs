use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::product_index::{NewProductIndex, ProductIndex};
use crate::models::product_index::{
    NewProductIndex as DbNewProductIndex, ProductIndex as DbProductIndex,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, ProductIndexListQuery, ProductIndexReader, ProductIndexWriter,
};
use crate::schema::product_index;

const LIKE_ESCAPE: char = '\\';

/// Wraps `term` in `%` wildcards, escaping any wildcard it already contains.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Base query with every filter of `query` applied, without ordering or paging.
fn filtered(query: &ProductIndexListQuery) -> product_index::BoxedQuery<'_, Sqlite> {
    let mut items = product_index::table.into_boxed();

    items = items.filter(product_index::sync_status.eq(query.status.as_str()));

    if let Some(category) = &query.category {
        items = items.filter(product_index::category.eq(category.as_str()));
    }

    if let Some(term) = &query.search {
        let pattern = like_pattern(term);
        items = items.filter(
            product_index::name
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(product_index::description
                    .like(pattern)
                    .escape(LIKE_ESCAPE)),
        );
    }

    items
}

impl ProductIndexReader for DieselRepository {
    fn list_indexed_products(
        &self,
        query: ProductIndexListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductIndex>)> {
        let mut conn = self.conn()?;

        // Page and count share one read transaction so they see the same snapshot.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut items = filtered(&query)
                .select(DbProductIndex::as_select())
                .order((
                    product_index::admin_priority.desc(),
                    product_index::popularity_score.desc(),
                    product_index::created_at.desc(),
                ));

            if let Some(pagination) = &query.pagination {
                items = items
                    .limit(pagination.limit())
                    .offset(pagination.offset());
            }

            let products = items
                .load::<DbProductIndex>(conn)?
                .into_iter()
                .map(ProductIndex::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            let total: i64 = filtered(&query).count().get_result(conn)?;

            Ok((total as usize, products))
        })
    }
}

impl ProductIndexWriter for DieselRepository {
    fn create_indexed_products(&self, products: &[NewProductIndex]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let insertables: Vec<DbNewProductIndex> = products.iter().map(Into::into).collect();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::insert_into(product_index::table)
                .values(&insertables)
                .execute(conn)?;
            Ok(affected)
        })
    }
}
