use validator::Validate;

use crate::domain::types::SyncStatus;
use crate::dto::products::{ProductIndexPage, ProductIndexQuery};
use crate::pagination::total_pages;
use crate::repository::{ProductIndexListQuery, ProductIndexReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of indexed products matching every supplied filter.
///
/// `limit` is capped at `max_limit`. `currentPage` echoes the requested page
/// even when it lies past the last one, in which case `products` is empty.
pub fn list_indexed_products<R>(
    repo: &R,
    query: ProductIndexQuery,
    max_limit: usize,
) -> ServiceResult<ProductIndexPage>
where
    R: ProductIndexReader + ?Sized,
{
    query.validate()?;

    let status = match query.status.as_deref() {
        Some(status) => status.parse::<SyncStatus>()?,
        None => SyncStatus::default(),
    };

    let max_limit = i64::try_from(max_limit).unwrap_or(i64::MAX).max(1);
    let limit = if query.limit > max_limit {
        log::warn!(
            "Requested limit {} exceeds maximum {max_limit}, capping",
            query.limit
        );
        max_limit
    } else {
        query.limit
    };

    let mut list_query = ProductIndexListQuery::new(status).paginate(query.page, limit);

    if let Some(category) = query.category {
        list_query = list_query.category(category);
    }

    if let Some(term) = query.search {
        list_query = list_query.search(term);
    }

    let (total, products) = repo
        .list_indexed_products(list_query)
        .map_err(ServiceError::from)?;

    Ok(ProductIndexPage {
        products,
        total_pages: total_pages(total, limit),
        current_page: query.page,
        total,
    })
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    /// Ensures the repository is never hit when validation fails.
    #[test]
    fn invalid_limit_skips_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_indexed_products().times(0);
        let query = ProductIndexQuery {
            limit: 0,
            ..Default::default()
        };

        let result = list_indexed_products(&repo, query, 200);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    /// Confirms the page window and filters reach the repository unchanged.
    #[test]
    fn passes_offset_window_to_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_indexed_products()
            .withf(|query| {
                query.status == SyncStatus::Inactive
                    && query.category.as_deref() == Some("boots")
                    && query
                        .pagination
                        .is_some_and(|p| p.offset() == 40 && p.limit() == 20)
            })
            .times(1)
            .returning(|_| Ok((41, vec![])));
        let query = ProductIndexQuery {
            status: Some("inactive".to_string()),
            category: Some("boots".to_string()),
            page: 3,
            limit: 20,
            ..Default::default()
        };

        let page = list_indexed_products(&repo, query, 200).expect("should list products");

        assert_eq!(page.total, 41);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
    }

    /// Storage failures surface as internal errors with the diagnostic kept.
    #[test]
    fn repository_error_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_list_indexed_products()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError("no such table".to_string())));

        let result = list_indexed_products(&repo, ProductIndexQuery::default(), 200);

        assert!(
            matches!(result, Err(ServiceError::Internal(message)) if message.contains("no such table"))
        );
    }
}
