use crate::{
    controllers::Answered,
    error::{NoPendingConfirmationSnafu, RosterResult},
    state::RosterState,
    view::DeleteTarget,
};
use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use snafu::OptionExt;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DialogAnswer {
    Confirm,
    Cancel,
}

#[derive(Deserialize)]
pub struct DialogForm {
    answer: DialogAnswer,
}

pub async fn post_dialog(
    State(state): State<RosterState>,
    Form(DialogForm { answer }): Form<DialogForm>,
) -> RosterResult<Redirect> {
    let pending = state
        .view()
        .lock()
        .await
        .pending
        .take()
        .context(NoPendingConfirmationSnafu)?;
    let answer = Answered(answer == DialogAnswer::Confirm);

    match pending.target {
        DeleteTarget::Student(id) => state.students().delete_student(id, &answer).await,
        DeleteTarget::Mark { id, student } => {
            state.marks().delete_mark(id, student, &answer).await;
        }
    }

    Ok(Redirect::to("/"))
}

pub async fn post_dismiss_notice(State(state): State<RosterState>) -> Redirect {
    state.view().lock().await.notice = None;
    Redirect::to("/")
}
