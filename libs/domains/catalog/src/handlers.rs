//! HTTP handlers for the Catalog API

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{on, MethodRouter},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use strum::IntoEnumIterator;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::routes::{self, CatalogOperation};
use crate::service::CatalogService;

type SharedService<R> = Arc<CatalogService<R>>;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        get_by_category,
        get_by_name,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router from the routing table
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    CatalogOperation::iter()
        .fold(Router::new(), |router, op| {
            router.route(op.path(), endpoint::<R>(op))
        })
        .with_state(Arc::new(service))
}

fn endpoint<R: ProductRepository + 'static>(
    op: CatalogOperation,
) -> MethodRouter<SharedService<R>> {
    let filter = op.method_filter();
    match op {
        CatalogOperation::ListAll => on(filter, list_products::<R>),
        CatalogOperation::GetById => on(filter, get_product::<R>),
        CatalogOperation::GetByCategory => on(filter, get_by_category::<R>),
        CatalogOperation::GetByName => on(filter, get_by_name::<R>),
        CatalogOperation::Create => on(filter, create_product::<R>),
        CatalogOperation::Update => on(filter, update_product::<R>),
        CatalogOperation::Delete => on(filter, delete_product::<R>),
    }
}

fn created(product: Product) -> impl IntoResponse {
    let location = routes::location(product.id.as_deref().unwrap_or_default());
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    )
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    responses(
        (status = 200, description = "All products, possibly none", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_all().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "24-character product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_by_id(&id).await?;
    Ok(Json(product))
}

/// Get the products of a category
#[utoipa::path(
    get,
    path = "/GetProductByCategory/{category}",
    tag = "Catalog",
    params(
        ("category" = String, Path, description = "Exact category name")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_category<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(category): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_by_category(&category).await?;
    Ok(Json(products))
}

/// Get the products with a given name
#[utoipa::path(
    get,
    path = "/GetProductByName/{name}",
    tag = "Catalog",
    params(
        ("name" = String, Path, description = "Exact product name")
    ),
    responses(
        (status = 200, description = "Products with the name", body = Vec<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_name<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(name): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_by_name(&name).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Catalog",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(product).await?;
    Ok(created(product))
}

/// Replace a product, inserting it when it does not exist
#[utoipa::path(
    put,
    path = "",
    tag = "Catalog",
    request_body = Product,
    responses(
        (status = 201, description = "Product stored", body = Product,
            headers(("Location" = String, description = "URL of the stored product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> ProductResult<impl IntoResponse> {
    let product = service.update(product).await?;
    Ok(created(product))
}

/// Delete a product
///
/// Succeeds whether or not the product existed. The body says whether
/// anything was removed.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "24-character product ID")
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = bool),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<String>,
) -> ProductResult<Json<bool>> {
    let removed = service.delete(&id).await?;
    Ok(Json(removed))
}
