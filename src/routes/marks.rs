use crate::{
    data::{
        mark::{MarkFields, MarkId},
        student::StudentId,
    },
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

pub async fn post_toggle_marks(
    State(state): State<RosterState>,
    Path(student): Path<StudentId>,
) -> Redirect {
    state.marks().toggle_marks(student).await;
    Redirect::to("/")
}

pub async fn post_mark_form(
    State(state): State<RosterState>,
    Path(student): Path<StudentId>,
    Form(fields): Form<MarkFields>,
) -> Redirect {
    state.marks().submit_mark(student, fields).await;
    Redirect::to("/")
}

pub async fn post_marks_page(
    State(state): State<RosterState>,
    Path(student): Path<StudentId>,
    Form(PageForm { page }): Form<PageForm>,
) -> Redirect {
    state.marks().list_marks(student, page).await;
    Redirect::to("/")
}

pub async fn post_edit_mark(
    State(state): State<RosterState>,
    Path(id): Path<MarkId>,
) -> RosterResult<Redirect> {
    state.marks().select_mark_for_edit(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn post_delete_mark(
    State(state): State<RosterState>,
    Path(id): Path<MarkId>,
) -> RosterResult<Redirect> {
    let student = state.marks().owner_of(id).await?;
    state.view().lock().await.pending = Some(PendingConfirmation {
        target: DeleteTarget::Mark { id, student },
    });
    Ok(Redirect::to("/"))
}
