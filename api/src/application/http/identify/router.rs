use super::handlers::identify_object::{__path_identify_object, identify_object};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(identify_object))]
pub struct IdentifyApiDoc;

pub fn identify_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/identify", state.args.server.root_path),
        post(identify_object),
    )
}
