//! Project and app naming.
//!
//! A user-supplied name lives in two namespaces. The *display* name is what
//! was typed on the command line; it names the project directory and appears
//! in messages. The *safe* name replaces `-` with `_` so the name is valid
//! wherever it occurs as a Python module path: the generator invocations,
//! `ROOT_URLCONF`, `WSGI_APPLICATION`, and `INSTALLED_APPS`.

use crate::domain::error::DomainError;

/// Name of the project being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    display: String,
    safe: String,
}

impl ProjectName {
    /// Parse and validate a user-supplied project name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        validate(raw)?;
        Ok(Self {
            display: raw.to_owned(),
            safe: sanitize(raw),
        })
    }

    /// The name as typed; names the project directory.
    pub fn display_name(&self) -> &str {
        &self.display
    }

    /// Identifier-safe form; used at every module-path substitution site.
    pub fn safe(&self) -> &str {
        &self.safe
    }
}

/// Name of the app module added inside the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName {
    display: String,
    safe: String,
}

impl AppName {
    /// Parse and validate a user-supplied app name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        validate(raw)?;
        Ok(Self {
            display: raw.to_owned(),
            safe: sanitize(raw),
        })
    }

    /// The name as typed.
    pub fn display_name(&self) -> &str {
        &self.display
    }

    /// Identifier-safe form handed to the app generator and registered in
    /// `INSTALLED_APPS`.
    pub fn safe(&self) -> &str {
        &self.safe
    }
}

fn sanitize(raw: &str) -> String {
    raw.replace('-', "_")
}

fn validate(raw: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        name: raw.to_owned(),
        reason: reason.to_owned(),
    };

    if raw.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if raw.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if raw.contains('/') || raw.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphens_become_underscores_in_safe_name() {
        let name = ProjectName::parse("My-Blog").unwrap();
        assert_eq!(name.display_name(), "My-Blog");
        assert_eq!(name.safe(), "My_Blog");
    }

    #[test]
    fn plain_name_is_unchanged() {
        let name = ProjectName::parse("shop").unwrap();
        assert_eq!(name.display_name(), "shop");
        assert_eq!(name.safe(), "shop");
    }

    #[test]
    fn app_name_sanitized_the_same_way() {
        let app = AppName::parse("user-profiles").unwrap();
        assert_eq!(app.safe(), "user_profiles");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(
            ProjectName::parse(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn dotfile_name_rejected() {
        assert!(ProjectName::parse(".hidden").is_err());
    }

    #[test]
    fn path_separators_rejected() {
        assert!(ProjectName::parse("a/b").is_err());
        assert!(AppName::parse("a\\b").is_err());
    }

    #[test]
    fn underscored_names_pass_through() {
        for raw in ["my_app", "project123", "MyApp"] {
            let name = ProjectName::parse(raw).unwrap();
            assert_eq!(name.safe(), raw);
        }
    }
}
