//! Inbound `/api/cats` handlers.
//!
//! Each handler forwards to one `CatService` operation. The service blocks
//! on its outbound call, so the work runs on tokio's blocking pool.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    Json,
};
use cat_core::{ApiError, CatRequest, CatResponse, CatService};
use url::{Position, Url};

use crate::error::RouteError;

pub type AppState = Arc<CatService>;

pub async fn create_cat(
    State(service): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    payload: Result<Json<CatRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CatResponse>), RouteError> {
    let path = uri.path();
    let Json(input) = payload.map_err(|rejection| RouteError::uncaught("JsonRejection", rejection, path))?;

    let cat = blocking(&service, path, move |service| service.create_cat(&input)).await?;
    let host = headers.get(header::HOST).and_then(|host| host.to_str().ok());
    let location = location(host, path, &cat.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(cat)))
}

pub async fn get_cat(
    State(service): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<CatResponse>, RouteError> {
    let cat = blocking(&service, uri.path(), move |service| service.get_cat(&id)).await?;
    Ok(Json(cat))
}

pub async fn update_cat(
    State(service): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    payload: Result<Json<CatRequest>, JsonRejection>,
) -> Result<StatusCode, RouteError> {
    let path = uri.path();
    let Json(input) = payload.map_err(|rejection| RouteError::uncaught("JsonRejection", rejection, path))?;

    blocking(&service, path, move |service| service.update_cat(&id, &input)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_cat(
    State(service): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<StatusCode, RouteError> {
    blocking(&service, uri.path(), move |service| service.delete_cat(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_cats(
    State(service): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<CatResponse>>, RouteError> {
    let cats = blocking(&service, uri.path(), |service| service.list_cats()).await?;
    Ok(Json(cats))
}

pub async fn fallback(OriginalUri(uri): OriginalUri) -> RouteError {
    RouteError::no_resource(uri.path())
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> RouteError {
    RouteError::uncaught(
        "MethodNotAllowed",
        format!("Request method '{method}' is not supported."),
        uri.path(),
    )
}

/// URI of a created cat: `{path}/{id}` with `id` encoded as one segment,
/// absolute when the request named its `Host`.
fn location(host: Option<&str>, path: &str, id: &str) -> String {
    let Ok(mut url) = Url::parse(&format!("http://{}{path}", host.unwrap_or("localhost"))) else {
        return format!("{}/{id}", path.trim_end_matches('/'));
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(id);
    }
    match host {
        Some(_) => url.into(),
        None => url[Position::BeforePath..].to_string(),
    }
}

async fn blocking<T, F>(service: &AppState, path: &str, op: F) -> Result<T, RouteError>
where
    T: Send + 'static,
    F: FnOnce(&CatService) -> Result<T, ApiError> + Send + 'static,
{
    let service = Arc::clone(service);
    match tokio::task::spawn_blocking(move || op(&service)).await {
        Ok(result) => result.map_err(|error| RouteError::from_api(error, path)),
        Err(join_error) => Err(RouteError::uncaught("JoinError", join_error, path)),
    }
}
