use std::sync::Arc;

use crate::db::TodoRepository;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}
