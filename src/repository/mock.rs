//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::product_index::{NewProductIndex, ProductIndex};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductIndexListQuery, ProductIndexReader, ProductIndexWriter};

mock! {
    pub Repository {}

    impl ProductIndexReader for Repository {
        fn list_indexed_products(
            &self,
            query: ProductIndexListQuery,
        ) -> RepositoryResult<(usize, Vec<ProductIndex>)>;
    }

    impl ProductIndexWriter for Repository {
        fn create_indexed_products(&self, products: &[NewProductIndex]) -> RepositoryResult<usize>;
    }
}
