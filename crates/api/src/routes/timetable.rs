use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/admin/timetable/:class_id",
            get(handlers::timetable::get_timetable),
        )
        .route(
            "/admin/timetable/conflicts/:class_id",
            get(handlers::timetable::get_conflicts),
        )
        .route(
            "/admin/timetable/slot",
            post(handlers::timetable::create_slot),
        )
        .route(
            "/admin/timetable/slot/:slot_id",
            put(handlers::timetable::update_slot),
        )
        .route(
            "/admin/timetable/slot/:slot_id",
            delete(handlers::timetable::delete_slot),
        )
}
