//! Intake form validation. Runs before any API call.

pub const MISSING_DOC_LINK: &str = "Please provide a documentation link";
pub const MISSING_POSITION: &str = "Please specify your position";
pub const PROCESSING_FAILED: &str = "Error processing documentation. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub doc_link: String,
    pub position: String,
}

/// Per-field messages; `None` means the field is fine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeErrors {
    pub doc_link: Option<String>,
    pub position: Option<String>,
}

impl IntakeErrors {
    pub fn is_empty(&self) -> bool {
        self.doc_link.is_none() && self.position.is_none()
    }
}

impl IntakeForm {
    pub fn new(doc_link: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            doc_link: doc_link.into(),
            position: position.into(),
        }
    }

    pub fn validate(&self) -> Result<(), IntakeErrors> {
        let mut errors = IntakeErrors::default();

        if self.doc_link.trim().is_empty() {
            errors.doc_link = Some(MISSING_DOC_LINK.to_string());
        }
        if self.position.trim().is_empty() {
            errors.position = Some(MISSING_POSITION.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        let errors = IntakeForm::new("", "Developer").validate().unwrap_err();
        assert_eq!(errors.doc_link.as_deref(), Some(MISSING_DOC_LINK));
        assert_eq!(errors.position, None);
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let errors = IntakeForm::new("   ", "\t").validate().unwrap_err();
        assert!(errors.doc_link.is_some());
        assert_eq!(errors.position.as_deref(), Some(MISSING_POSITION));
    }

    #[test]
    fn test_valid_form() {
        assert!(IntakeForm::new("https://example.com/docs", "Developer").validate().is_ok());
    }
}
