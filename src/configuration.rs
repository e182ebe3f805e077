use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::email_client::EmailClient;

/// Credential values shipped in setup guides. Delivery with them is
/// guaranteed to fail, so they are rejected like missing ones.
const PLACEHOLDER_CREDENTIALS: &[&str] = &[
    "your-email@example.com",
    "your-email@gmail.com",
    "your-app-password",
    "your-16-character-app-password",
];

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to determine the current directory")]
    WorkingDirectory(#[source] std::io::Error),
    #[error("{0}")]
    UnknownEnvironment(String),
    #[error("Failed to load configuration")]
    Load(#[from] config::ConfigError),
    #[error("`{0}` is not set. Provide it through the environment before starting the server.")]
    MissingCredential(&'static str),
    #[error("`{0}` still holds a placeholder value.")]
    PlaceholderCredential(&'static str),
}

pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. `development` and `production` are acceptable.",
                other
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub notification: NotificationSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    /// Account identity used as the `From` of every notification.
    #[serde(default)]
    pub sender_email: String,
    #[serde(default = "empty_secret")]
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

#[derive(serde::Deserialize, Clone)]
pub struct NotificationSettings {
    /// Fixed inbox that receives every contact submission.
    pub recipient_email: String,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(self) -> Result<EmailClient, reqwest::Error> {
        let timeout = self.timeout();
        EmailClient::new(
            self.base_url,
            self.sender_email,
            self.authorization_token,
            timeout,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_credential("email_client.sender_email", &self.sender_email)?;
        check_credential(
            "email_client.authorization_token",
            self.authorization_token.expose_secret(),
        )
    }
}

fn check_credential(key: &'static str, value: &str) -> Result<(), ConfigurationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigurationError::MissingCredential(key));
    }
    if PLACEHOLDER_CREDENTIALS.contains(&value) {
        return Err(ConfigurationError::PlaceholderCredential(key));
    }
    Ok(())
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.email_client.validate()
    }
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir().map_err(ConfigurationError::WorkingDirectory)?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("RUST_ENV")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(ConfigurationError::UnknownEnvironment)?;

    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN=...` sets
        // `Settings.email_client.authorization_token`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}
