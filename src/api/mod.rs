pub mod todo;

use axum::{
    Json, Router,
    response::Html,
    routing::{MethodRouter, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::openapi::{self, ApiDoc};
use crate::state::AppState;

pub const TODO_BASE_PATH: &str = "/api/Todo";

/// Base paths served by the todo handlers.
const TODO_BASE_PATHS: [&str; 2] = [TODO_BASE_PATH, "/api/todo"];

const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

pub fn router(state: AppState) -> Router {
    let mut app = Router::new();

    for base in TODO_BASE_PATHS {
        app = app
            .route(base, collection_routes())
            .route(&format!("{base}/"), collection_routes())
            .route(&format!("{base}/{{id}}"), item_routes());
    }

    app.route("/api-docs", get(swagger_ui))
        .route("/api-docs/", get(swagger_ui))
        .route(OPENAPI_JSON_PATH, get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn collection_routes() -> MethodRouter<AppState> {
    get(todo::list_todos).post(todo::create_todo)
}

fn item_routes() -> MethodRouter<AppState> {
    get(todo::get_todo)
        .put(todo::update_todo)
        .delete(todo::delete_todo)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<String> {
    Html(openapi::swagger_ui_html(OPENAPI_JSON_PATH))
}
