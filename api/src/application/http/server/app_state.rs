use std::sync::Arc;

use pantrylens_core::application::PantryLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryLensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryLensService) -> Self {
        Self { args, service }
    }
}
