use thiserror::Error;

/// The parsed set of user-supplied project parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Name of the project.
    pub name: String,
    /// The directory the scaffold should be generated in.
    pub directory: String,
    /// URL of the project's remote repository.
    pub repository: String,
    /// Whether the project will serve static assets.
    pub has_static_assets: bool,
}

/// A required configuration field that was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name cannot be empty")]
    MissingName,
    #[error("project directory cannot be empty")]
    MissingDirectory,
    #[error("project repository url cannot be empty")]
    MissingRepository,
}

impl Config {
    /// Check that every required field is present.
    ///
    /// Returns one error per blank field, in the order name, directory,
    /// repository. A whitespace-only value counts as blank. The static
    /// assets flag is not required and never validated.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::MissingName);
        }
        if self.directory.trim().is_empty() {
            errors.push(ValidationError::MissingDirectory);
        }
        if self.repository.trim().is_empty() {
            errors.push(ValidationError::MissingRepository);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_validates() {
        let conf = Config {
            name: "project1".into(),
            directory: "./project1".into(),
            repository: "github.com/username/project1".into(),
            has_static_assets: true,
        };

        assert!(conf.validate().is_empty());
    }

    #[test]
    fn empty_config_returns_one_error_per_required_field() {
        let errors = Config::default().validate();

        assert_eq!(
            errors,
            vec![
                ValidationError::MissingName,
                ValidationError::MissingDirectory,
                ValidationError::MissingRepository,
            ]
        );

        let messages = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "project name cannot be empty",
                "project directory cannot be empty",
                "project repository url cannot be empty",
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        let conf = Config {
            name: "  ".into(),
            directory: "\t".into(),
            repository: "project".into(),
            has_static_assets: false,
        };

        assert_eq!(
            conf.validate(),
            vec![
                ValidationError::MissingName,
                ValidationError::MissingDirectory,
            ]
        );
    }
}
