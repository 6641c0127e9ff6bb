//! Menu Item API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemReplace, MenuItemUpdate};

use crate::api::or_missing;
use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::extract::{IdPath, Payload};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, validate_required_text, validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};

const RESOURCE: &str = "Menu item";

fn validate(data: &MenuItemCreate) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&data.description, "menu_item_description", MAX_DESCRIPTION_LEN)?;
    Ok(())
}

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::MenuItemNotFound, format!("{RESOURCE} {id} not found"))
}

/// GET /api/menu-items/ - 全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.db.pool).await?;
    Ok(Json(items))
}

/// POST /api/menu-items/ - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    validate(&payload)?;
    let item = menu_item::create(&state.db.pool, payload).await?;
    tracing::info!(menu_item_id = item.id, name = %item.name, "Menu item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/menu-items/{id}/
pub async fn get_by_id(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id}/ - 整体替换，未提供的描述保留原值
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    Payload(payload): Payload<MenuItemReplace>,
) -> AppResult<Json<MenuItem>> {
    let current = menu_item::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let replaced = payload.apply_to(&current);
    validate(&replaced)?;
    let item = menu_item::update(&state.db.pool, id, replaced)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    Ok(Json(item))
}

/// PATCH /api/menu-items/{id}/ - 部分更新
pub async fn partial_update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    Payload(payload): Payload<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    let current = menu_item::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let merged = payload.apply_to(&current);
    validate(&merged)?;
    let item = menu_item::update(&state.db.pool, id, merged)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id}/
pub async fn delete(State(state): State<ServerState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    menu_item::delete(&state.db.pool, id)
        .await
        .map_err(|e| or_missing(e, not_found(id)))?;
    tracing::info!(menu_item_id = id, "Menu item deleted");
    Ok(StatusCode::NO_CONTENT)
}
