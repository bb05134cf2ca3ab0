use crate::cli::parser::{Commands, FormKind};
use crate::core::validation;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Validate { form, file } = cmd {
        let content = fs::read_to_string(expand_tilde(file))?;

        let result = match form {
            FormKind::Student => validation::validate_student_form(&serde_json::from_str(&content)?),
            FormKind::StudentLogin => {
                validation::validate_student_login(&serde_json::from_str(&content)?)
            }
            FormKind::AdminLogin => {
                validation::validate_admin_login(&serde_json::from_str(&content)?)
            }
        };

        match result {
            Ok(()) => success("Form is valid"),
            Err(AppError::Validation(fields)) => {
                for f in &fields {
                    error(f);
                }
                return Err(AppError::Validation(fields));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
