//! Menu API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    response::Response,
};
use shared::models::{self as api, MenuItemUpdate, parse_price};
use shared::{AppError, AppResult, ErrorCode};

use super::form::{IMAGE_FIELD, MenuForm};
use crate::api::found;
use crate::core::ServerState;
use crate::db::models::{MenuItemCreate, parse_key, record_key};
use crate::db::repository::{MenuItemRepository, RepoError, menu_item::TABLE};

const DASHBOARD: &str = "/dashboard.html";

/// GET /api/menu - 菜品列表 (插入顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<api::MenuItem>>> {
    let conn = state.pool.acquire().await?;
    let items = MenuItemRepository::new(&conn).find_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// POST /add-menu - 新增菜品
///
/// 四个字段都必填；图片先落盘再写库，写库失败时删除刚保存的图片。
pub async fn create(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let form = MenuForm::read(multipart).await?;

    let name = form.name.ok_or_else(|| AppError::required("name"))?;
    let price = form.price.ok_or_else(|| AppError::required("price"))?;
    validate_price(&price)?;
    let category = form.category.ok_or_else(|| AppError::required("category"))?;
    let file = form.image.ok_or_else(|| {
        AppError::new(ErrorCode::NoFileProvided).with_detail("field", IMAGE_FIELD)
    })?;

    let image = state
        .images
        .store(file.filename.as_deref(), &file.data)
        .await?;

    let data = MenuItemCreate {
        name,
        price,
        image: image.clone(),
        category,
        created_at: shared::util::now_millis(),
    };

    let created = match state.pool.acquire().await {
        Ok(conn) => MenuItemRepository::new(&conn).create(data).await,
        Err(e) => Err(e),
    };
    match created {
        Ok(item) => {
            tracing::info!(id = %item.id, name = %item.name, "Menu item created");
            Ok(found(DASHBOARD))
        }
        Err(e) => {
            state.images.remove(&image).await;
            Err(e.into())
        }
    }
}

/// POST /update-menu/{id} - 部分更新
///
/// 新图片先保存；记录更新成功后才删除旧图片，更新失败则删除新图片。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Response> {
    let Some(id) = parse_key(TABLE, &id) else {
        return Err(menu_item_not_found(&id));
    };

    let form = MenuForm::read(multipart).await?;
    if let Some(price) = &form.price {
        validate_price(price)?;
    }

    let conn = state.pool.acquire().await?;
    let repo = MenuItemRepository::new(&conn);
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| menu_item_not_found(&record_key(&id)))?;

    let new_image = match &form.image {
        Some(file) => Some(
            state
                .images
                .store(file.filename.as_deref(), &file.data)
                .await?,
        ),
        None => None,
    };

    let patch = MenuItemUpdate {
        name: form.name,
        price: form.price,
        image: new_image.clone(),
        category: form.category,
    };
    if patch.is_empty() {
        return Ok(found(DASHBOARD));
    }

    match repo.update(&id, patch).await {
        Ok(item) => {
            tracing::info!(id = %item.id, "Menu item updated");
            if new_image.is_some() && !existing.image.is_empty() && existing.image != item.image {
                state.images.remove(&existing.image).await;
            }
            Ok(found(DASHBOARD))
        }
        Err(e) => {
            if let Some(url) = &new_image {
                state.images.remove(url).await;
            }
            match e {
                RepoError::NotFound(_) => Err(menu_item_not_found(&record_key(&id))),
                other => Err(other.into()),
            }
        }
    }
}

/// GET /delete-menu/{id} - 删除菜品
///
/// 不存在或格式错误的 id 不报错，同样重定向。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_key(TABLE, &id) else {
        tracing::debug!(id = %id, "Delete with malformed id ignored");
        return Ok(found(DASHBOARD));
    };

    let deleted = {
        let conn = state.pool.acquire().await?;
        MenuItemRepository::new(&conn).delete(&id).await?
    };

    // 记录删除成功后才删图片
    if let Some(item) = deleted {
        tracing::info!(id = %id, name = %item.name, "Menu item deleted");
        if !item.image.is_empty() {
            state.images.remove(&item.image).await;
        }
    }

    Ok(found(DASHBOARD))
}

fn validate_price(price: &str) -> AppResult<()> {
    parse_price(price).map(|_| ()).ok_or_else(|| {
        AppError::new(ErrorCode::MenuItemInvalidPrice).with_detail("price", price)
    })
}

fn menu_item_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id)
}
