use chrono::Utc;
use tracing::warn;
use validator::Validate;

use crate::{
    email::resend::{EmailSender, OutgoingEmail},
    entities::contact::{ContactForm, ContactRecord, ContactSubmitted},
    errors::AppError,
    repositories::contact::ContactRepository,
    utils::html::escape_html,
};

/// Relays a contact submission: primary channel is the email provider,
/// secondary is a best-effort mirror row in the data store. The mirror
/// write never fails the operation; a missing email configuration only
/// does in production.
pub struct ContactRelay<M, R>
where
    M: EmailSender,
    R: ContactRepository,
{
    mailer: Option<M>,
    mirror: Option<R>,
    recipient: Option<String>,
    sender: String,
    production: bool,
}

impl<M, R> ContactRelay<M, R>
where
    M: EmailSender,
    R: ContactRepository,
{
    pub fn new(
        mailer: Option<M>,
        mirror: Option<R>,
        recipient: Option<String>,
        sender: String,
        production: bool,
    ) -> Self {
        ContactRelay {
            mailer,
            mirror,
            recipient,
            sender,
            production,
        }
    }

    pub async fn submit(&self, form: ContactForm) -> Result<ContactSubmitted, AppError> {
        form.validate()?;

        let email_id = match (&self.mailer, &self.recipient) {
            (Some(mailer), Some(recipient)) => {
                let email = OutgoingEmail {
                    from: self.sender.clone(),
                    to: recipient.clone(),
                    reply_to: form.email.clone(),
                    subject: format!("Nouveau message de contact - {}", form.name),
                    text: build_text_body(&form),
                    html: build_html_body(&form),
                };
                Some(mailer.send(&email).await.map_err(AppError::from)?)
            }
            _ if self.production => {
                return Err(AppError::ConfigurationMissing(
                    "Configuration email manquante".to_string(),
                ));
            }
            _ => {
                warn!("Email provider not configured, accepting submission without sending");
                None
            }
        };

        self.mirror_submission(&form).await;

        let email_sent = email_id.is_some();
        Ok(ContactSubmitted {
            success: true,
            message: if email_sent {
                "Message envoyé avec succès".to_string()
            } else {
                "Message reçu, envoi d'email désactivé".to_string()
            },
            email_id,
            email_sent,
        })
    }

    /// Best-effort mirror into the data store. Failures are logged and
    /// swallowed: the email has already been sent (or intentionally
    /// skipped) by the time this runs.
    async fn mirror_submission(&self, form: &ContactForm) {
        let Some(mirror) = &self.mirror else {
            return;
        };

        let record = ContactRecord::from_form(form, Utc::now());
        if let Err(e) = mirror.insert_contact(&record).await {
            warn!("Contact mirror write failed (ignored): {}", e);
        }
    }
}

fn build_text_body(form: &ContactForm) -> String {
    let company_line = form
        .company
        .as_deref()
        .map(|company| format!("\nEntreprise : {}", company))
        .unwrap_or_default();
    let project_type_line = form
        .project_type
        .as_deref()
        .map(|project_type| format!("\nType de projet : {}", project_type))
        .unwrap_or_default();

    format!(
        "Nouveau message depuis le formulaire de contact\n\n\
         Nom : {}\n\
         Email : {}{}{}\n\n\
         Message :\n{}\n\n\
         ---\n\
         Ce message a été envoyé depuis le formulaire de contact de votre site web.",
        form.name, form.email, company_line, project_type_line, form.message
    )
}

fn build_html_body(form: &ContactForm) -> String {
    let name = escape_html(&form.name);
    let email = escape_html(&form.email);
    let message = escape_html(&form.message);

    let company_block = form
        .company
        .as_deref()
        .map(|company| format!("<p><strong>Entreprise :</strong> {}</p>", escape_html(company)))
        .unwrap_or_default();
    let project_type_block = form
        .project_type
        .as_deref()
        .map(|project_type| {
            format!("<p><strong>Type de projet :</strong> {}</p>", escape_html(project_type))
        })
        .unwrap_or_default();

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333;">Nouveau message depuis le formulaire de contact</h2>

  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Nom :</strong> {name}</p>
    <p><strong>Email :</strong> <a href="mailto:{email}">{email}</a></p>
    {company_block}
    {project_type_block}
  </div>

  <div style="margin: 20px 0;">
    <h3 style="color: #333;">Message :</h3>
    <p style="white-space: pre-wrap; line-height: 1.6;">{message}</p>
  </div>

  <hr style="border: none; border-top: 1px solid #ddd; margin: 30px 0;">
  <p style="color: #666; font-size: 12px;">
    Ce message a été envoyé depuis le formulaire de contact de votre site web.
  </p>
</div>"#
    )
}
