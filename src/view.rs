use crate::{
    controllers::{Generation, marks::DELETE_MARK_PROMPT, students::DELETE_STUDENT_PROMPT},
    data::{
        PageMeta,
        mark::{Mark, MarkFields, MarkId},
        student::{Student, StudentFields, StudentId},
    },
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The one view everybody shares. Never hold the lock across an API call.
pub type SharedView = Arc<Mutex<ViewState>>;

#[derive(Debug, Default)]
pub struct ViewState {
    pub students: StudentsView,
    pub marks: MarksView,
    pub notice: Option<Notification>,
    pub pending: Option<PendingConfirmation>,
}

impl ViewState {
    pub fn shared() -> SharedView {
        Arc::new(Mutex::new(Self::default()))
    }
}

/// Whether submitting a form creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Creating,
    Editing(Id),
}

impl<Id> Default for FormMode<Id> {
    fn default() -> Self {
        Self::Creating
    }
}

impl<Id> FormMode<Id> {
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarksPanel {
    #[default]
    Closed,
    Open(StudentId),
}

impl MarksPanel {
    pub fn is_open_for(self, student: StudentId) -> bool {
        self == Self::Open(student)
    }
}

#[derive(Debug)]
pub struct StudentsView {
    pub page: u64,
    pub students: Vec<Student>,
    pub meta: PageMeta,
    pub form: StudentFields,
    pub mode: FormMode<StudentId>,
    pub(crate) generation: Generation,
}

impl Default for StudentsView {
    fn default() -> Self {
        Self {
            page: 1,
            students: Vec::new(),
            meta: PageMeta::default(),
            form: StudentFields::default(),
            mode: FormMode::Creating,
            generation: Generation::default(),
        }
    }
}

impl StudentsView {
    pub fn reset_form(&mut self) {
        self.form = StudentFields::default();
        self.mode = FormMode::Creating;
    }
}

#[derive(Debug)]
pub struct MarksView {
    pub panel: MarksPanel,
    pub page: u64,
    pub marks: Vec<Mark>,
    pub meta: PageMeta,
    pub form: MarkFields,
    pub mode: FormMode<MarkId>,
    pub(crate) generation: Generation,
}

impl Default for MarksView {
    fn default() -> Self {
        Self {
            panel: MarksPanel::Closed,
            page: 1,
            marks: Vec::new(),
            meta: PageMeta::default(),
            form: MarkFields::default(),
            mode: FormMode::Creating,
            generation: Generation::default(),
        }
    }
}

impl MarksView {
    pub fn reset_form(&mut self) {
        self.form = MarkFields::default();
        self.mode = FormMode::Creating;
    }

    /// Forget the loaded page. Any fetch still in flight is invalidated too.
    pub(crate) fn discard_page(&mut self) {
        self.marks.clear();
        self.meta = PageMeta::default();
        self.page = 1;
        self.generation.issue();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A modal message for the user, shown until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Student(StudentId),
    Mark { id: MarkId, student: StudentId },
}

/// A delete that's waiting on the user to say yes or no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub target: DeleteTarget,
}

impl PendingConfirmation {
    pub const fn prompt(self) -> &'static str {
        match self.target {
            DeleteTarget::Student(_) => DELETE_STUDENT_PROMPT,
            DeleteTarget::Mark { .. } => DELETE_MARK_PROMPT,
        }
    }
}
