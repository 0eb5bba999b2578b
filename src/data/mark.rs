use crate::data::{number_or_raw, number_or_text, student::StudentId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkId(pub i64);

impl Display for MarkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mark {
    pub id: MarkId,
    pub student_id: StudentId,
    #[serde(default, deserialize_with = "number_or_text")]
    pub subject: String,
    /// Whatever the API stored, as display text: `87.5`, `"87.50"` and `null` all decode.
    #[serde(default, deserialize_with = "number_or_text")]
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkFields {
    pub subject: String,
    #[serde(serialize_with = "number_or_raw")]
    pub score: String,
}

impl From<&Mark> for MarkFields {
    fn from(mark: &Mark) -> Self {
        Self {
            subject: mark.subject.clone(),
            score: mark.score.clone(),
        }
    }
}

/// `POST /marks` body - the owning student rides alongside the form.
#[derive(Debug, Serialize)]
pub struct NewMark<'a> {
    pub student_id: StudentId,
    #[serde(flatten)]
    pub fields: &'a MarkFields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_mark_carries_student_id() {
        let fields = MarkFields {
            subject: "Maths".into(),
            score: "87.5".into(),
        };
        let body = NewMark {
            student_id: StudentId(3),
            fields: &fields,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"student_id": 3, "subject": "Maths", "score": 87.5})
        );
    }

    #[test]
    fn whole_scores_edit_without_trailing_zero() {
        let mark: Mark = serde_json::from_value(
            json!({"id": 1, "student_id": 1, "subject": "Art", "score": 90.0}),
        )
        .unwrap();
        assert_eq!(MarkFields::from(&mark).score, "90");
    }

    #[test]
    fn text_and_null_scores_still_decode() {
        let marks: Vec<Mark> = serde_json::from_value(json!([
            {"id": 1, "student_id": 1, "subject": "Art", "score": "87.50"},
            {"id": 2, "student_id": 1, "subject": "Maths", "score": null},
            {"id": 3, "student_id": 1, "subject": "PE", "score": 71.5},
        ]))
        .unwrap();

        let scores: Vec<_> = marks.iter().map(|m| m.score.as_str()).collect();
        assert_eq!(scores, ["87.50", "", "71.5"]);
    }
}
