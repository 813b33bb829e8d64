use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_index::{
    NewProductIndex as DomainNewProductIndex, ProductIndex as DomainProductIndex,
};
use crate::domain::types::{ProductId, SyncStatus, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_index)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::product_index::ProductIndex`].
pub struct ProductIndex {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub admin_priority: i32,
    pub popularity_score: f64,
    pub sync_status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_index)]
#[diesel(treat_none_as_default_value = false)]
/// Insertable form of [`ProductIndex`].
pub struct NewProductIndex<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: Option<&'a str>,
    pub admin_priority: i32,
    pub popularity_score: f64,
    pub sync_status: &'static str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ProductIndex> for DomainProductIndex {
    type Error = TypeConstraintError;

    fn try_from(product: ProductIndex) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::from_stored(product.id),
            name: product.name,
            description: product.description,
            category: product.category,
            admin_priority: product.admin_priority,
            popularity_score: product.popularity_score,
            sync_status: product.sync_status.parse::<SyncStatus>()?,
            created_at: product.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewProductIndex> for NewProductIndex<'a> {
    fn from(product: &'a DomainNewProductIndex) -> Self {
        Self {
            id: product.id.as_str(),
            name: product.name.as_str(),
            description: product.description.as_str(),
            category: product.category.as_deref(),
            admin_priority: product.admin_priority,
            popularity_score: product.popularity_score,
            sync_status: product.sync_status.as_str(),
            created_at: product.created_at,
        }
    }
}
