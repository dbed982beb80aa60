// src/state.rs

use crate::catalog::CategoryCatalog;

#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryCatalog,
}
