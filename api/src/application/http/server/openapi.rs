use crate::application::http::{identify::router::IdentifyApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PantryLens API"
    ),
    nest(
        (path = "/api", api = IdentifyApiDoc),
        (path = "/api", api = RecipeApiDoc),
    )
)]
pub struct ApiDoc;
