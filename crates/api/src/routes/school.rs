use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/admin/classes", get(handlers::school::list_classes))
        .route("/admin/subjects", get(handlers::school::list_subjects))
        .route("/admin/teachers", get(handlers::school::list_teachers))
}
