use std::sync::Arc;

use crate::repo::CustomerRepo;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CustomerRepo>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CustomerRepo>) -> Self {
        Self { repo }
    }
}
