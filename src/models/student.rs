//! Student-side data: the logged-in identity and the forms the screens submit.

use super::record::{flex_text, flex_text_or_empty, flex_text_verbatim};
use serde::Deserialize;

/// The student currently logged in, as returned by `/student/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentIdentity {
    #[serde(
        default,
        alias = "id",
        alias = "studentId",
        deserialize_with = "flex_text"
    )]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "flex_text")]
    pub name: Option<String>,
    #[serde(
        default,
        rename = "register_no",
        alias = "register_number",
        deserialize_with = "flex_text"
    )]
    pub register_number: Option<String>,
}

impl StudentIdentity {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none() && self.name.is_none() && self.register_number.is_none()
    }
}

/// Add/edit student form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    #[serde(
        rename = "register_no",
        alias = "register_number",
        deserialize_with = "flex_text_or_empty"
    )]
    pub register_number: String,
    #[serde(alias = "room_no", deserialize_with = "flex_text_or_empty")]
    pub room: String,
    #[serde(deserialize_with = "flex_text_or_empty")]
    pub year: String,
    #[serde(alias = "course")]
    pub student_class: String,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub address: Option<String>,
    #[serde(deserialize_with = "flex_text_verbatim")]
    pub email: Option<String>,
    #[serde(deserialize_with = "flex_text_verbatim")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentLogin {
    pub name: String,
    #[serde(
        rename = "register_no",
        alias = "register_number",
        deserialize_with = "flex_text_or_empty"
    )]
    pub register_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}
