use crate::{
    api::RosterApi,
    controllers::{Confirm, settle},
    data::{
        PAGE_SIZE, Page,
        mark::{MarkFields, MarkId},
        student::StudentId,
    },
    error::{MissingMarkSnafu, RosterResult},
    view::{FormMode, MarksPanel, Notification, SharedView},
};
use snafu::OptionExt;
use std::sync::Arc;

pub const DELETE_MARK_PROMPT: &str = "Delete this mark?";

/// Owns the marks of whichever student is expanded. Only one student's marks are ever loaded.
#[derive(Clone, Debug)]
pub struct MarksController {
    api: Arc<dyn RosterApi>,
    view: SharedView,
}

impl MarksController {
    pub fn new(api: Arc<dyn RosterApi>, view: SharedView) -> Self {
        Self { api, view }
    }

    pub async fn open_marks(&self, student: StudentId) {
        {
            let mut view = self.view.lock().await;
            let marks = &mut view.marks;
            if !marks.panel.is_open_for(student) {
                marks.reset_form();
            }
            marks.panel = MarksPanel::Open(student);
            marks.discard_page();
        }

        self.list_marks(student, 1).await;
    }

    pub async fn close_marks(&self) {
        let mut view = self.view.lock().await;
        let marks = &mut view.marks;
        marks.panel = MarksPanel::Closed;
        marks.reset_form();
        marks.discard_page();
    }

    /// What the marks button on a student's row does.
    pub async fn toggle_marks(&self, student: StudentId) {
        let already_open = self.view.lock().await.marks.panel.is_open_for(student);
        if already_open {
            self.close_marks().await;
        } else {
            self.open_marks(student).await;
        }
    }

    /// Responses for a student who has since been collapsed (or swapped out) are thrown away.
    pub async fn list_marks(&self, student: StudentId, page: u64) {
        let ticket = self.view.lock().await.marks.generation.issue();
        let result = self.api.list_marks(student, page, PAGE_SIZE).await;

        let mut view = self.view.lock().await;
        let marks = &mut view.marks;
        if !marks.generation.is_current(ticket) || !marks.panel.is_open_for(student) {
            debug!(%student, page, "Discarding stale page of marks");
            return;
        }

        match result {
            Ok(Page { data, meta }) => {
                marks.marks = data;
                marks.meta = meta;
                marks.page = page;
            }
            Err(e) => warn!(?e, %student, page, "Error fetching marks"),
        }
    }

    async fn refetch_current_page(&self, student: StudentId) {
        let page = self.view.lock().await.marks.page;
        self.list_marks(student, page).await;
    }

    pub async fn submit_mark(&self, student: StudentId, fields: MarkFields) {
        let mode = {
            let mut view = self.view.lock().await;
            view.marks.form = fields.clone();
            view.marks.mode
        };

        match mode {
            FormMode::Creating => self.create_mark(student, fields).await,
            FormMode::Editing(id) => self.update_mark(student, id, fields).await,
        }
    }

    pub async fn create_mark(&self, student: StudentId, fields: MarkFields) {
        let outcome = self.api.create_mark(student, &fields).await;
        self.finish_submit(student, outcome, Notification::success("Created!", "Mark added."))
            .await;
    }

    pub async fn update_mark(&self, student: StudentId, id: MarkId, fields: MarkFields) {
        let outcome = self.api.update_mark(id, &fields).await;
        self.finish_submit(student, outcome, Notification::success("Updated!", "Mark updated."))
            .await;
    }

    async fn finish_submit(
        &self,
        student: StudentId,
        outcome: RosterResult<()>,
        success: Notification,
    ) {
        let worked = {
            let mut view = self.view.lock().await;
            let worked = settle(&mut view, outcome, success, "Error saving mark");
            if worked {
                view.marks.reset_form();
            }
            worked
        };

        if worked {
            self.refetch_current_page(student).await;
        }
    }

    /// A rejection shows the server's `error` when it sent one, and only falls
    /// back to the generic "Unable to delete mark." otherwise.
    pub async fn delete_mark<C: Confirm + ?Sized>(
        &self,
        id: MarkId,
        student: StudentId,
        confirm: &C,
    ) {
        if !confirm.confirm(DELETE_MARK_PROMPT).await {
            debug!(%id, "Mark deletion cancelled");
            return;
        }

        let outcome = self.api.delete_mark(id).await;
        let worked = settle(
            &mut *self.view.lock().await,
            outcome,
            Notification::success("Deleted!", "Mark deleted."),
            "Unable to delete mark.",
        );

        if worked {
            self.refetch_current_page(student).await;
        }
    }

    pub async fn select_mark_for_edit(&self, id: MarkId) -> RosterResult<()> {
        let mut view = self.view.lock().await;
        let fields = view
            .marks
            .marks
            .iter()
            .find(|mark| mark.id == id)
            .map(MarkFields::from)
            .context(MissingMarkSnafu { id })?;

        view.marks.form = fields;
        view.marks.mode = FormMode::Editing(id);
        Ok(())
    }

    /// The student a mark on the loaded page belongs to.
    pub async fn owner_of(&self, id: MarkId) -> RosterResult<StudentId> {
        self.view
            .lock()
            .await
            .marks
            .marks
            .iter()
            .find(|mark| mark.id == id)
            .map(|mark| mark.student_id)
            .context(MissingMarkSnafu { id })
    }
}
