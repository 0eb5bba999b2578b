use crate::{
    data::student::{StudentFields, StudentId},
    error::RosterResult,
    routes::PageForm,
    state::RosterState,
    view::{DeleteTarget, PendingConfirmation},
};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

pub async fn post_student_form(
    State(state): State<RosterState>,
    Form(fields): Form<StudentFields>,
) -> Redirect {
    state.students().submit(fields).await;
    Redirect::to("/")
}

pub async fn post_students_page(
    State(state): State<RosterState>,
    Form(PageForm { page }): Form<PageForm>,
) -> Redirect {
    state.students().list_students(page).await;
    Redirect::to("/")
}

pub async fn post_edit_student(
    State(state): State<RosterState>,
    Path(id): Path<StudentId>,
) -> RosterResult<Redirect> {
    state.students().select_for_edit(id).await?;
    Ok(Redirect::to("/"))
}

/// Doesn't delete anything yet - that waits on the answer to the dialog.
pub async fn post_delete_student(
    State(state): State<RosterState>,
    Path(id): Path<StudentId>,
) -> Redirect {
    state.view().lock().await.pending = Some(PendingConfirmation {
        target: DeleteTarget::Student(id),
    });
    Redirect::to("/")
}
