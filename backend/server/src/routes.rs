use std::{collections::HashMap, sync::Arc};

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use roster::{Contact, payloads::RootData};

use crate::{
    actions::{create_action, destroy_action, favorite_action, update_action},
    error::AppError,
    loaders::{SearchQuery, contact_loader, root_loader},
    state::AppState,
    views::{Detail, page},
};

pub async fn root_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let root = root_loader(state.store.as_ref(), query.q).await;

    Html(page(&root, Detail::Index))
}

pub async fn create_handler(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(&create_action(state.store.as_ref()).await)
}

pub async fn contact_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let root = root_loader(state.store.as_ref(), query.q).await;

    match contact_loader(state.store.as_ref(), &id).await {
        Ok(contact) => Ok(Html(page(&root, Detail::Contact(&contact))).into_response()),
        Err(AppError::NotFound(_)) => Ok(not_found_page(&root, &id)),
        Err(err) => Err(err),
    }
}

pub async fn edit_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let root = root_loader(state.store.as_ref(), query.q).await;

    match contact_loader(state.store.as_ref(), &id).await {
        Ok(contact) => Ok(Html(page(&root, Detail::Edit(&contact))).into_response()),
        Err(AppError::NotFound(_)) => Ok(not_found_page(&root, &id)),
        Err(err) => Err(err),
    }
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let location = update_action(state.store.as_ref(), &id, &fields).await?;

    Ok(Redirect::to(&location))
}

pub async fn favorite_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let location = favorite_action(state.store.as_ref(), &id, &fields).await?;

    Ok(Redirect::to(&location))
}

pub async fn destroy_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let location = destroy_action(state.store.as_ref(), &id).await?;

    Ok(Redirect::to(&location))
}

pub async fn root_data_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<RootData> {
    Json(root_loader(state.store.as_ref(), query.q).await)
}

pub async fn contact_data_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, AppError> {
    Ok(Json(contact_loader(state.store.as_ref(), &id).await?))
}

// a missing contact renders in place, the sidebar stays usable
fn not_found_page(root: &RootData, id: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(page(root, Detail::NotFound(id)))).into_response()
}
