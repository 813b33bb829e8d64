use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::products::{ErrorResponse, ProductIndexParams, ProductIndexQuery};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::products::list_indexed_products;

pub const FETCH_PRODUCTS_ERROR: &str = "Failed to fetch products";

/// Lists synced products, filtered and paginated by the query string.
#[get("/products/index")]
pub async fn products_index(
    params: web::Query<ProductIndexParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let query = ProductIndexQuery::from(params.into_inner());
    let max_limit = server_config.max_page_limit;
    let repo = repo.into_inner();

    let result = web::block(move || list_indexed_products(repo.as_ref(), query, max_limit)).await;

    match result {
        Ok(Ok(page)) => HttpResponse::Ok().json(page),
        Ok(Err(err)) => service_error_response(FETCH_PRODUCTS_ERROR, err),
        Err(err) => {
            log::error!("{FETCH_PRODUCTS_ERROR}: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new(FETCH_PRODUCTS_ERROR, err.to_string()))
        }
    }
}
