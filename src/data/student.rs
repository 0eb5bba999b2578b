use crate::data::{number_or_raw, number_or_text};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default, deserialize_with = "number_or_text")]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_text")]
    pub email: String,
    /// Kept as display text - the form accepts anything, so the API may hand anything back.
    #[serde(default, deserialize_with = "number_or_text")]
    pub age: String,
}

/// The student form, exactly as typed. Also the body of create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "number_or_raw")]
    pub age: String,
}

impl From<&Student> for StudentFields {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            age: student.age.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn age_is_sent_as_number_when_it_parses() {
        let fields = StudentFields {
            name: "Ann".into(),
            email: "a@x.com".into(),
            age: "20".into(),
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({"name": "Ann", "email": "a@x.com", "age": 20})
        );
    }

    #[test]
    fn padded_age_is_sent_verbatim() {
        let fields = StudentFields {
            age: " 20".into(),
            ..StudentFields::default()
        };
        assert_eq!(serde_json::to_value(&fields).unwrap()["age"], json!(" 20"));
    }

    #[test]
    fn null_or_text_age_still_decodes() {
        let students: Vec<Student> = serde_json::from_value(json!([
            {"id": 1, "name": "Ann", "email": "a@x.com", "age": null},
            {"id": 2, "name": "Bo", "email": "b@x.com", "age": "19"},
            {"id": 3, "name": "Cy", "email": "c@x.com"},
            {"id": 4, "name": "Di", "email": "d@x.com", "age": 22},
        ]))
        .unwrap();

        let ages: Vec<_> = students.iter().map(|s| s.age.as_str()).collect();
        assert_eq!(ages, ["", "19", "", "22"]);
        assert_eq!(StudentFields::from(&students[3]).age, "22");
    }

    #[test]
    fn empty_fields_are_sent_as_is() {
        assert_eq!(
            serde_json::to_value(StudentFields::default()).unwrap(),
            json!({"name": "", "email": "", "age": ""})
        );
    }
}
