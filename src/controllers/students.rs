use crate::{
    api::RosterApi,
    controllers::{Confirm, settle},
    data::{
        PAGE_SIZE, Page,
        student::{StudentFields, StudentId},
    },
    error::{MissingStudentSnafu, RosterResult},
    view::{FormMode, Notification, SharedView},
};
use snafu::OptionExt;
use std::sync::Arc;

pub const DELETE_STUDENT_PROMPT: &str = "Delete this student?";

/// Owns the page of students on display and every change made to them.
#[derive(Clone, Debug)]
pub struct StudentsController {
    api: Arc<dyn RosterApi>,
    view: SharedView,
}

impl StudentsController {
    pub fn new(api: Arc<dyn RosterApi>, view: SharedView) -> Self {
        Self { api, view }
    }

    /// Replaces the displayed page on success. On failure the old page stays up.
    pub async fn list_students(&self, page: u64) {
        let ticket = self.view.lock().await.students.generation.issue();
        let result = self.api.list_students(page, PAGE_SIZE).await;

        let mut view = self.view.lock().await;
        let students = &mut view.students;
        if !students.generation.is_current(ticket) {
            debug!(page, "Discarding stale page of students");
            return;
        }

        match result {
            Ok(Page { data, meta }) => {
                students.students = data;
                students.meta = meta;
                students.page = page;
            }
            Err(e) => warn!(?e, page, "Error fetching students"),
        }
    }

    async fn refetch_current_page(&self) {
        let page = self.view.lock().await.students.page;
        self.list_students(page).await;
    }

    /// Keeps what was typed in the form, then creates or updates depending on the form's mode.
    pub async fn submit(&self, fields: StudentFields) {
        let mode = {
            let mut view = self.view.lock().await;
            view.students.form = fields.clone();
            view.students.mode
        };

        match mode {
            FormMode::Creating => self.create_student(fields).await,
            FormMode::Editing(id) => self.update_student(id, fields).await,
        }
    }

    pub async fn create_student(&self, fields: StudentFields) {
        let outcome = self.api.create_student(&fields).await;
        self.finish_submit(
            outcome,
            Notification::success("Created!", "Student added successfully!"),
        )
        .await;
    }

    pub async fn update_student(&self, id: StudentId, fields: StudentFields) {
        let outcome = self.api.update_student(id, &fields).await;
        self.finish_submit(
            outcome,
            Notification::success("Updated!", "Student updated successfully!"),
        )
        .await;
    }

    async fn finish_submit(&self, outcome: RosterResult<()>, success: Notification) {
        let worked = {
            let mut view = self.view.lock().await;
            let worked = settle(&mut view, outcome, success, "Unknown error");
            if worked {
                view.students.reset_form();
            }
            worked
        };

        if worked {
            self.refetch_current_page().await;
        }
    }

    pub async fn delete_student<C: Confirm + ?Sized>(&self, id: StudentId, confirm: &C) {
        if !confirm.confirm(DELETE_STUDENT_PROMPT).await {
            debug!(%id, "Student deletion cancelled");
            return;
        }

        let outcome = self.api.delete_student(id).await;
        let worked = settle(
            &mut *self.view.lock().await,
            outcome,
            Notification::success("Deleted!", "Student deleted."),
            "Delete failed",
        );

        if worked {
            self.refetch_current_page().await;
        }
    }

    /// Loads a student from the current page into the form; the next submit updates them.
    pub async fn select_for_edit(&self, id: StudentId) -> RosterResult<()> {
        let mut view = self.view.lock().await;
        let fields = view
            .students
            .students
            .iter()
            .find(|student| student.id == id)
            .map(StudentFields::from)
            .context(MissingStudentSnafu { id })?;

        view.students.form = fields;
        view.students.mode = FormMode::Editing(id);
        Ok(())
    }
}
