use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound contact form payload. Field names mirror what the site's
/// form posts, so `projectType` stays camelCase on the wire.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Le champ nom est requis"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Le champ email est requis"),
        email(message = "Adresse email invalide")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Le champ message est requis"))]
    pub message: String,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default, rename = "projectType")]
    pub project_type: Option<String>,
}

/// Row mirrored into the `contacts` collection. The timestamp is
/// attached at relay time, never supplied by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub project_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    pub fn from_form(form: &ContactForm, created_at: DateTime<Utc>) -> Self {
        ContactRecord {
            name: form.name.clone(),
            email: form.email.clone(),
            company: form.company.clone(),
            message: form.message.clone(),
            project_type: form.project_type.clone(),
            created_at,
        }
    }
}

/// Relay outcome returned to the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmitted {
    pub success: bool,
    pub message: String,
    #[serde(rename = "emailId")]
    pub email_id: Option<String>,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Arnaud".into(),
            email: "arnaud@example.com".into(),
            message: "Bonjour".into(),
            company: None,
            project_type: None,
        }
    }

    #[test]
    fn valid_form_passes_validation() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let mut form = valid_form();
        form.name = "".into();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.message = "".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let mut form = valid_form();
        form.email = "not-an-address".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn project_type_deserializes_from_camel_case() {
        let form: ContactForm = serde_json::from_str(
            r#"{"name":"A","email":"a@b.com","message":"hi","projectType":"Site vitrine"}"#,
        )
        .unwrap();
        assert_eq!(form.project_type.as_deref(), Some("Site vitrine"));
    }
}
