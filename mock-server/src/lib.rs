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
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Error body in the `{"detail": ...}` shape the client extracts.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

type ApiFailure = (StatusCode, Json<ErrorBody>);

fn failure(status: StatusCode, detail: &str) -> ApiFailure {
    (
        status,
        Json(ErrorBody {
            detail: detail.to_string(),
        }),
    )
}

pub type Db = Arc<RwLock<HashMap<Uuid, Task>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let tasks = db.read().await;
    Json(tasks.values().cloned().collect())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<CreateTask>,
) -> Result<(StatusCode, Json<Task>), ApiFailure> {
    if input.title.trim().is_empty() {
        return Err(failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Title must not be empty",
        ));
    }
    let task = Task {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
    };
    db.write().await.insert(task.id, task.clone());
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Task>, ApiFailure> {
    let tasks = db.read().await;
    tasks
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Task not found"))
}

async fn delete_task(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiFailure> {
    let mut tasks = db.write().await;
    tasks
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Task not found"))
}
