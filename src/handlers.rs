// src/handlers.rs
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use crate::errors::{
    AppError, ERR_CATEGORY_NOT_EXISTS, ERR_CONVERT_VARIABLE_TYPE, ERR_NOT_FOUND,
    FIELD_GET_CATEGORY, FIELD_GET_CATEGORIES, FIELD_NOT_FOUND,
};
use crate::filters::ListingParams;
use crate::models::CategoryResponse;
use crate::pagination::{Items, PaginatedList};
use crate::response::ResponseEnvelope;
use crate::state::AppState;

type CategoryPage = PaginatedList<CategoryResponse, Items>;

pub async fn list_categories_handler(
    State(app_state): State<Arc<AppState>>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> ResponseEnvelope<CategoryPage> {
    // Malformed query strings fall back to the defaults instead of failing.
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(
                "[{}] ignoring unreadable query string: {}",
                FIELD_GET_CATEGORIES,
                rejection
            );
            ListingParams::default()
        }
    };
    tracing::info!("GET /api/categories with {:?}", params);

    let catalog = &app_state.categories;
    let pagination = params.pagination(catalog.count(&params));
    let rows = catalog
        .page(&params, &pagination)
        .into_iter()
        .map(CategoryResponse::from)
        .collect();

    ResponseEnvelope::success(
        PaginatedList::new(&pagination, rows),
        "get categories success",
    )
}

pub async fn get_category_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ResponseEnvelope<CategoryResponse>, AppError> {
    let category_id: i64 = id
        .parse()
        .map_err(|_| AppError::bad_request(FIELD_GET_CATEGORY, ERR_CONVERT_VARIABLE_TYPE))?;

    let category = app_state
        .categories
        .find(category_id)
        .ok_or_else(|| AppError::not_found(FIELD_GET_CATEGORY, ERR_CATEGORY_NOT_EXISTS))?;

    Ok(ResponseEnvelope::success(
        CategoryResponse::from(category),
        "get product detail success!",
    ))
}

pub async fn fallback_handler() -> AppError {
    AppError::not_found(FIELD_NOT_FOUND, ERR_NOT_FOUND)
}
