use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cat {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub color: String,
    pub weight: f64,
}

#[derive(Deserialize)]
pub struct CatInput {
    pub name: String,
    pub color: String,
    pub weight: f64,
}

pub type Db = Arc<RwLock<HashMap<String, Cat>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/cats", get(list_cats).post(create_cat))
        .route("/cats/{id}", get(get_cat).put(update_cat).delete(delete_cat))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_cats(State(db): State<Db>) -> Json<Vec<Cat>> {
    let cats = db.read().await;
    Json(cats.values().cloned().collect())
}

async fn create_cat(
    State(db): State<Db>,
    Json(input): Json<CatInput>,
) -> (StatusCode, Json<Cat>) {
    let cat = Cat {
        id: Uuid::new_v4().simple().to_string(),
        name: input.name,
        color: input.color,
        weight: input.weight,
    };
    db.write().await.insert(cat.id.clone(), cat.clone());
    (StatusCode::CREATED, Json(cat))
}

async fn get_cat(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Cat>, StatusCode> {
    let cats = db.read().await;
    cats.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Replaces every field and answers with an empty 200.
async fn update_cat(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<CatInput>,
) -> StatusCode {
    let mut cats = db.write().await;
    match cats.get_mut(&id) {
        Some(cat) => {
            cat.name = input.name;
            cat.color = input.color;
            cat.weight = input.weight;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_cat(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut cats = db.write().await;
    cats.remove(&id).map(|_| StatusCode::OK).unwrap_or(StatusCode::NOT_FOUND)
}
