//! Product endpoints.
//!
//! Nothing is stored: every handler works on the request-scoped values and
//! returns them, sometimes decorated.

use super::types::{
    IdentifiedProductResponse, PricedProductResponse, Product, ProductLookupResponse,
    ProductNumberResponse, SuppliedProductResponse,
};
use crate::api::{
    error::ValidationErrorBody,
    extract::{lenient_bool, ValidJson, ValidPath, ValidQuery},
};
use axum::{http::HeaderMap, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::IntoParams;

const WAREHOUSE_PRODUCT_NUMBER: u32 = 18;
const STORE_PRODUCT_NUMBER: u32 = 8;
const SUPPLIER_HEADER: &str = "supplier";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ProductPath {
    pub product_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct NumericProductPath {
    /// Numeric product id.
    pub product_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductNameQuery {
    pub product_name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductNumberQuery {
    pub product_name: Option<String>,
    /// Look the product up in the warehouse.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub warehouse: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SupplierQuery {
    /// Takes precedence over the `supplier` header.
    pub supplier: Option<String>,
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(ProductPath, ProductNameQuery),
    responses(
        (status = 200, description = "Product reference", body = ProductLookupResponse),
    ),
    tag = "products"
)]
#[instrument]
pub async fn read_product(
    ValidPath(path): ValidPath<ProductPath>,
    ValidQuery(query): ValidQuery<ProductNameQuery>,
) -> impl IntoResponse {
    Json(ProductLookupResponse {
        product_id: path.product_id,
        product_name: query.product_name,
    })
}

#[utoipa::path(
    get,
    path = "/product-nums/{product_id}",
    params(ProductPath, ProductNumberQuery),
    responses(
        (status = 200, description = "Product number for the chosen location", body = ProductNumberResponse),
        (status = 422, description = "warehouse is not a boolean", body = ValidationErrorBody),
    ),
    tag = "products"
)]
#[instrument]
pub async fn read_product_number(
    ValidPath(path): ValidPath<ProductPath>,
    ValidQuery(query): ValidQuery<ProductNumberQuery>,
) -> impl IntoResponse {
    let product_number = if query.warehouse {
        WAREHOUSE_PRODUCT_NUMBER
    } else {
        STORE_PRODUCT_NUMBER
    };

    Json(ProductNumberResponse {
        product_id: path.product_id,
        product_number,
        product_name: query.product_name,
    })
}

#[utoipa::path(
    post,
    path = "/products/",
    request_body = Product,
    responses(
        (status = 200, description = "Product echoed back", body = Product),
        (status = 422, description = "Invalid product", body = ValidationErrorBody),
    ),
    tag = "products"
)]
#[instrument]
pub async fn create_product(ValidJson(product): ValidJson<Product>) -> impl IntoResponse {
    Json(product)
}

#[utoipa::path(
    post,
    path = "/products_price/",
    request_body = Product,
    responses(
        (status = 200, description = "Product with `Total_price` when a tax is given", body = PricedProductResponse),
        (status = 422, description = "Invalid product", body = ValidationErrorBody),
    ),
    tag = "products"
)]
#[instrument]
pub async fn create_product_price(ValidJson(product): ValidJson<Product>) -> impl IntoResponse {
    let total_price = product.total_price();
    debug!(?total_price, "priced product");

    Json(PricedProductResponse {
        product,
        total_price,
    })
}

#[utoipa::path(
    post,
    path = "/products_id/{product_id}",
    params(NumericProductPath),
    request_body = Product,
    responses(
        (status = 200, description = "Product with its path id", body = IdentifiedProductResponse),
        (status = 422, description = "Invalid product or product_id", body = ValidationErrorBody),
    ),
    tag = "products"
)]
#[instrument]
pub async fn create_product_id(
    ValidPath(path): ValidPath<NumericProductPath>,
    ValidJson(product): ValidJson<Product>,
) -> impl IntoResponse {
    Json(IdentifiedProductResponse {
        product_id: path.product_id,
        product,
    })
}

#[utoipa::path(
    post,
    path = "/products_attrs/{product_id}",
    params(
        NumericProductPath,
        SupplierQuery,
        ("supplier" = Option<String>, Header, description = "Supplier, used when the query string has none"),
    ),
    request_body = Product,
    responses(
        (status = 200, description = "Product with its path id and supplier", body = SuppliedProductResponse),
        (status = 422, description = "Invalid product or product_id", body = ValidationErrorBody),
    ),
    tag = "products"
)]
#[instrument(skip(headers))]
pub async fn create_product_attrs(
    ValidPath(path): ValidPath<NumericProductPath>,
    ValidQuery(query): ValidQuery<SupplierQuery>,
    headers: HeaderMap,
    ValidJson(product): ValidJson<Product>,
) -> impl IntoResponse {
    Json(SuppliedProductResponse {
        product_id: path.product_id,
        product,
        supplier: supplier(query, &headers),
    })
}

fn supplier(query: SupplierQuery, headers: &HeaderMap) -> Option<String> {
    query.supplier.or_else(|| {
        headers
            .get(SUPPLIER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    })
}
