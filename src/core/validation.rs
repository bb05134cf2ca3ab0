//! Local form checks run before anything is sent to the backend.
//! All failing fields are reported together.

use crate::errors::{AppError, AppResult, FieldError};
use crate::models::{AdminLogin, StudentForm, StudentLogin};
use regex::Regex;
use std::sync::LazyLock;

// ASCII digits only: `\d` would also accept full-width and other scripts.
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Required field; returns whether it was present.
    fn required(&mut self, field: &'static str, value: &str, message: &'static str) -> bool {
        if value.trim().is_empty() {
            self.fail(field, message);
            return false;
        }
        true
    }

    fn pattern(&mut self, field: &'static str, value: &str, re: &Regex, message: &'static str) {
        if !re.is_match(value) {
            self.fail(field, message);
        }
    }

    fn finish(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

pub fn validate_admin_login(form: &AdminLogin) -> AppResult<()> {
    let mut c = Checker::default();
    c.required("username", &form.username, "Please enter your username");
    c.required("password", &form.password, "Please enter your password");
    c.finish()
}

pub fn validate_student_login(form: &StudentLogin) -> AppResult<()> {
    let mut c = Checker::default();
    c.required("name", &form.name, "Please enter your name");
    if c.required(
        "register_no",
        &form.register_number,
        "Please enter your register number",
    ) {
        c.pattern(
            "register_no",
            &form.register_number,
            &DIGITS,
            "Register number must contain only digits",
        );
    }
    c.finish()
}

pub fn validate_student_form(form: &StudentForm) -> AppResult<()> {
    let mut c = Checker::default();

    c.required("name", &form.name, "Full name is required");
    if c.required(
        "register_no",
        &form.register_number,
        "Register number is required",
    ) {
        c.pattern(
            "register_no",
            &form.register_number,
            &DIGITS,
            "Register number must contain only digits",
        );
    }
    if c.required("room", &form.room, "Room number is required") {
        c.pattern("room", &form.room, &DIGITS, "Room number must contain only digits");
    }
    if c.required("year", &form.year, "Year is required") {
        c.pattern("year", &form.year, &YEAR, "Year must be a 4-digit number");
    }
    c.required("student_class", &form.student_class, "Class is required");

    if let Some(phone) = form.phone.as_deref().filter(|p| !p.is_empty()) {
        c.pattern("phone", phone, &PHONE, "Phone number must be exactly 10 digits");
    }
    if let Some(email) = form.email.as_deref().filter(|m| !m.is_empty()) {
        c.pattern("email", email, &EMAIL, "Please enter a valid email address");
    }

    c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> StudentForm {
        StudentForm {
            name: "Asha Nair".into(),
            register_number: "2210451".into(),
            room: "204".into(),
            year: "2025".into(),
            student_class: "BSc CS".into(),
            email: Some("asha@example.com".into()),
            phone: Some("9876543210".into()),
            ..StudentForm::default()
        }
    }

    fn failing_fields(res: AppResult<()>) -> Vec<&'static str> {
        match res {
            Err(AppError::Validation(errs)) => errs.iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate_student_form(&valid_form()).is_ok());
    }

    #[test]
    fn every_bad_field_is_reported() {
        let form = StudentForm {
            register_number: "22A".into(),
            year: "25".into(),
            phone: Some("12345".into()),
            email: Some("not-an-email".into()),
            ..valid_form()
        };
        assert_eq!(
            failing_fields(validate_student_form(&form)),
            ["register_no", "year", "phone", "email"]
        );
    }

    #[test]
    fn blank_required_fields_report_once() {
        let form = StudentForm::default();
        assert_eq!(
            failing_fields(validate_student_form(&form)),
            ["name", "register_no", "room", "year", "student_class"]
        );
    }

    #[test]
    fn student_login_needs_numeric_register_number() {
        let login = StudentLogin {
            name: "Asha".into(),
            register_number: "22-10".into(),
        };
        assert_eq!(failing_fields(validate_student_login(&login)), ["register_no"]);
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let login = StudentLogin {
            name: "Asha".into(),
            register_number: "２２１０٤٥١".into(),
        };
        assert_eq!(failing_fields(validate_student_login(&login)), ["register_no"]);

        let form = StudentForm {
            room: "２０４".into(),
            year: "２０２５".into(),
            phone: Some("９８７６５４３２１０".into()),
            ..valid_form()
        };
        assert_eq!(
            failing_fields(validate_student_form(&form)),
            ["room", "year", "phone"]
        );
    }

    #[test]
    fn whitespace_only_optional_fields_are_invalid() {
        let form: StudentForm = serde_json::from_str(
            r#"{"name": "Asha", "register_no": 2210451, "room": 204, "year": 2025,
                "student_class": "BSc", "phone": " ", "email": " "}"#,
        )
        .unwrap();
        assert_eq!(
            failing_fields(validate_student_form(&form)),
            ["phone", "email"]
        );

        let empty: StudentForm = serde_json::from_str(
            r#"{"name": "Asha", "register_no": "2210451", "room": "204", "year": "2025",
                "student_class": "BSc", "phone": "", "email": null}"#,
        )
        .unwrap();
        assert!(validate_student_form(&empty).is_ok());
    }

    #[test]
    fn admin_login_requires_both_fields() {
        let login = AdminLogin {
            username: " ".into(),
            password: String::new(),
        };
        assert_eq!(
            failing_fields(validate_admin_login(&login)),
            ["username", "password"]
        );
    }
}
