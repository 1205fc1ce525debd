mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, fallback, theme, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{email, prefs, utils};

use email::resend::ResendMailer;
use repositories::supabase_repo::SupabaseRepo;
use settings::AppConfig;
use use_cases::{contact::ContactRelay, projects::ProjectDirectory};

pub type AppProjectDirectory = ProjectDirectory<SupabaseRepo>;
pub type AppContactRelay = ContactRelay<ResendMailer, SupabaseRepo>;

pub struct AppState {
    pub project_directory: AppProjectDirectory,
    pub contact_relay: AppContactRelay,
    pub config: AppConfig,
}

impl AppState {
    /// Resolves both SaaS integrations once; a missing endpoint or
    /// credential leaves the matching component unconfigured rather
    /// than failing startup.
    pub fn new(config: AppConfig) -> Self {
        let supabase = match (&config.supabase_url, &config.supabase_key) {
            (Some(url), Some(key)) => Some(SupabaseRepo::new(url.clone(), key.clone())),
            _ => None,
        };

        let mailer = config
            .resend_api_key
            .as_ref()
            .map(|key| ResendMailer::new(key.clone()));

        let project_directory = ProjectDirectory::new(supabase.clone());
        let contact_relay = ContactRelay::new(
            mailer,
            supabase,
            config.contact_recipient.clone(),
            config.contact_sender.clone(),
            config.is_production(),
        );

        AppState {
            project_directory,
            contact_relay,
            config,
        }
    }
}
