use crate::{
    routes::{
        dialog::{post_dialog, post_dismiss_notice},
        index::get_index_route,
        marks::{
            post_delete_mark, post_edit_mark, post_mark_form, post_marks_page, post_toggle_marks,
        },
        students::{post_delete_student, post_edit_student, post_student_form, post_students_page},
    },
    state::RosterState,
};
use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

pub mod dialog;
pub mod index;
pub mod marks;
pub mod students;

#[derive(Deserialize)]
pub struct PageForm {
    pub page: u64,
}

pub fn router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", post(post_student_form))
        .route("/students/page", post(post_students_page))
        .route("/students/{id}/edit", post(post_edit_student))
        .route("/students/{id}/delete", post(post_delete_student))
        .route("/students/{id}/marks", post(post_toggle_marks))
        .route("/students/{id}/marks/submit", post(post_mark_form))
        .route("/students/{id}/marks/page", post(post_marks_page))
        .route("/marks/{id}/edit", post(post_edit_mark))
        .route("/marks/{id}/delete", post(post_delete_mark))
        .route("/dialog", post(post_dialog))
        .route("/notice/dismiss", post(post_dismiss_notice))
        .with_state(state)
}
