use crate::{
    db::{DbConnection, DbPool},
    domain::{
        product_index::{NewProductIndex, ProductIndex},
        types::SyncStatus,
    },
    pagination::Pagination,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod product_index;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}

/// Filters applied conjunctively to the product index.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductIndexListQuery {
    pub status: SyncStatus,
    pub category: Option<String>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ProductIndexListQuery {
    pub fn new(status: SyncStatus) -> Self {
        Self {
            status,
            category: None,
            search: None,
            pagination: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

impl Default for ProductIndexListQuery {
    fn default() -> Self {
        Self::new(SyncStatus::Active)
    }
}

pub trait ProductIndexReader {
    /// Returns the total number of matching rows and the requested page.
    fn list_indexed_products(
        &self,
        query: ProductIndexListQuery,
    ) -> RepositoryResult<(usize, Vec<ProductIndex>)>;
}

pub trait ProductIndexWriter {
    fn create_indexed_products(&self, products: &[NewProductIndex]) -> RepositoryResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults_to_active_without_filters() {
        let query = ProductIndexListQuery::default();
        assert_eq!(query.status, SyncStatus::Active);
        assert!(query.category.is_none());
        assert!(query.search.is_none());
        assert!(query.pagination.is_none());
    }

    #[test]
    fn list_query_builder_sets_filters() {
        let query = ProductIndexListQuery::new(SyncStatus::Pending)
            .category("footwear")
            .search("shoe")
            .paginate(2, 10);

        assert_eq!(query.status, SyncStatus::Pending);
        assert_eq!(query.category.as_deref(), Some("footwear"));
        assert_eq!(query.search.as_deref(), Some("shoe"));
        assert_eq!(query.pagination, Some(Pagination::new(2, 10)));
    }
}
