use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};
use url::Url;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Base URL of the managed data source. Absent ⇒ reads serve the
    /// embedded fallback list and the contact mirror is skipped.
    #[serde(default)]
    pub supabase_url: Option<String>,

    #[serde(default)]
    pub supabase_key: Option<String>,

    /// Email provider credential. Absent ⇒ degraded mode outside
    /// production, configuration error inside it.
    #[serde(default)]
    pub resend_api_key: Option<String>,

    /// Mailbox that receives contact submissions.
    #[serde(default)]
    pub contact_recipient: Option<String>,

    #[serde(default = "default_contact_sender")]
    pub contact_sender: String,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-Gateway".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_contact_sender() -> String {
    "Portfolio Contact <onboarding@resend.dev>".to_string()
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name.to_string().to_lowercase())).required(false))
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // The SaaS keys keep the env-var names the hosting dashboards use
        config.supabase_url = fill_or_env(config.supabase_url, "SUPABASE_URL");
        config.supabase_key = fill_or_env(config.supabase_key, "SUPABASE_KEY");
        config.resend_api_key = fill_or_env(config.resend_api_key, "RESEND_API_KEY");
        config.contact_recipient = fill_or_env(config.contact_recipient, "CONTACT_EMAIL");

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production".to_string());
        }
        if let Some(url) = &self.supabase_url {
            match Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                _ => errors.push(format!("SUPABASE_URL must be an absolute http(s) URL, got: {}", url)),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Both the endpoint and the credential must be present before any
    /// remote query is attempted.
    pub fn data_source_configured(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_key.is_some()
    }

    pub fn email_configured(&self) -> bool {
        self.resend_api_key.is_some() && self.contact_recipient.is_some()
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn fill_or_env(current: Option<String>, env_key: &str) -> Option<String> {
    current
        .filter(|v| !v.trim().is_empty())
        .or_else(|| env::var(env_key).ok().filter(|v| !v.trim().is_empty()))
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

fn redact(secret: &Option<String>) -> &str {
    match secret {
        None => "[MISSING]",
        Some(s) if s.is_empty() => "[MISSING]",
        Some(_) => "[REDACTED]",
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &redact(&self.supabase_key))
            .field("resend_api_key", &redact(&self.resend_api_key))
            .field("contact_recipient", &self.contact_recipient)
            .field("contact_sender", &self.contact_sender)
            .finish()
    }
}
