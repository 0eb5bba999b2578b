//! In-memory stand-in for the remote API, recording every call it gets.

use crate::{
    api::RosterApi,
    data::{
        Page, PageMeta,
        mark::{Mark, MarkFields, MarkId},
        student::{Student, StudentFields, StudentId},
    },
    error::{RosterError, RosterResult},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListStudents { page: u64, limit: u64 },
    CreateStudent(StudentFields),
    UpdateStudent(StudentId, StudentFields),
    DeleteStudent(StudentId),
    ListMarks { student: StudentId, page: u64, limit: u64 },
    CreateMark(StudentId, MarkFields),
    UpdateMark(MarkId, MarkFields),
    DeleteMark(MarkId),
}

/// Holds the next list call (students or marks) until released.
#[derive(Debug, Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

#[derive(Debug, Default)]
struct Inner {
    students: Vec<Student>,
    marks: Vec<Mark>,
    calls: Vec<Call>,
    next_id: i64,
    reject_mutations: Option<Option<String>>,
    fail_lists: bool,
    gate: Option<Arc<Gate>>,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    inner: Mutex<Inner>,
}

pub fn student(id: i64, name: &str) -> Student {
    Student {
        id: StudentId(id),
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        age: "20".to_string(),
    }
}

pub fn mark(id: i64, student: i64, subject: &str, score: f64) -> Mark {
    Mark {
        id: MarkId(id),
        student_id: StudentId(student),
        subject: subject.to_string(),
        score: score.to_string(),
    }
}

fn page_of<T: Clone>(items: &[T], page: u64, limit: u64) -> Page<T> {
    let start = usize::try_from(page.saturating_sub(1) * limit).unwrap_or(usize::MAX);
    let data = items
        .iter()
        .skip(start)
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .cloned()
        .collect();
    Page {
        data,
        meta: PageMeta {
            total: items.len() as u64,
            limit,
        },
    }
}

impl FakeApi {
    pub fn with_students(students: Vec<Student>) -> Self {
        let next_id = students.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                students,
                next_id,
                ..Inner::default()
            }),
        }
    }

    pub fn with_marks(self, marks: Vec<Mark>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id = inner
                .next_id
                .max(marks.iter().map(|m| m.id.0).max().unwrap_or(0) + 1);
            inner.marks = marks;
        }
        self
    }

    /// Every mutation from now on fails, carrying `message` as the API's `error` field.
    pub fn reject_mutations(&self, message: Option<&str>) {
        self.inner.lock().unwrap().reject_mutations = Some(message.map(ToString::to_string));
    }

    pub fn fail_lists(&self, fail: bool) {
        self.inner.lock().unwrap().fail_lists = fail;
    }

    pub fn gate_next_list(&self) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.inner.lock().unwrap().gate = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn students(&self) -> Vec<Student> {
        self.inner.lock().unwrap().students.clone()
    }

    fn record(&self, call: Call) -> RosterResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let is_list = matches!(call, Call::ListStudents { .. } | Call::ListMarks { .. });
        inner.calls.push(call);

        if is_list {
            if inner.fail_lists {
                return Err(RosterError::Rejected {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: None,
                });
            }
        } else if let Some(message) = inner.reject_mutations.clone() {
            return Err(RosterError::Rejected {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message,
            });
        }
        Ok(())
    }

    fn take_id(&self) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }
}

async fn hold(gate: Option<Arc<Gate>>) {
    if let Some(gate) = gate {
        gate.entered.notify_one();
        gate.release.notified().await;
    }
}

#[async_trait]
impl RosterApi for FakeApi {
    async fn list_students(&self, page: u64, limit: u64) -> RosterResult<Page<Student>> {
        let gate = self.inner.lock().unwrap().gate.take();
        self.record(Call::ListStudents { page, limit })?;
        let page = page_of(&self.inner.lock().unwrap().students, page, limit);

        hold(gate).await;
        Ok(page)
    }

    async fn create_student(&self, fields: &StudentFields) -> RosterResult<()> {
        self.record(Call::CreateStudent(fields.clone()))?;
        let id = StudentId(self.take_id());
        self.inner.lock().unwrap().students.push(Student {
            id,
            name: fields.name.clone(),
            email: fields.email.clone(),
            age: fields.age.clone(),
        });
        Ok(())
    }

    async fn update_student(&self, id: StudentId, fields: &StudentFields) -> RosterResult<()> {
        self.record(Call::UpdateStudent(id, fields.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(student) = inner.students.iter_mut().find(|s| s.id == id) {
            student.name.clone_from(&fields.name);
            student.email.clone_from(&fields.email);
            student.age.clone_from(&fields.age);
        }
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> RosterResult<()> {
        self.record(Call::DeleteStudent(id))?;
        self.inner.lock().unwrap().students.retain(|s| s.id != id);
        Ok(())
    }

    async fn list_marks(
        &self,
        student: StudentId,
        page: u64,
        limit: u64,
    ) -> RosterResult<Page<Mark>> {
        let gate = self.inner.lock().unwrap().gate.take();
        self.record(Call::ListMarks {
            student,
            page,
            limit,
        })?;
        let theirs: Vec<Mark> = self
            .inner
            .lock()
            .unwrap()
            .marks
            .iter()
            .filter(|m| m.student_id == student)
            .cloned()
            .collect();
        let page = page_of(&theirs, page, limit);

        hold(gate).await;
        Ok(page)
    }

    async fn create_mark(&self, student: StudentId, fields: &MarkFields) -> RosterResult<()> {
        self.record(Call::CreateMark(student, fields.clone()))?;
        let id = MarkId(self.take_id());
        self.inner.lock().unwrap().marks.push(Mark {
            id,
            student_id: student,
            subject: fields.subject.clone(),
            score: fields.score.clone(),
        });
        Ok(())
    }

    async fn update_mark(&self, id: MarkId, fields: &MarkFields) -> RosterResult<()> {
        self.record(Call::UpdateMark(id, fields.clone()))?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(mark) = inner.marks.iter_mut().find(|m| m.id == id) {
            mark.subject.clone_from(&fields.subject);
            mark.score.clone_from(&fields.score);
        }
        Ok(())
    }

    async fn delete_mark(&self, id: MarkId) -> RosterResult<()> {
        self.record(Call::DeleteMark(id))?;
        self.inner.lock().unwrap().marks.retain(|m| m.id != id);
        Ok(())
    }
}
