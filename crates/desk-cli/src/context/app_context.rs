use anyhow::Context;
use desk_api::DeskHubClient;
use desk_auth::Session;
use desk_config::DeskConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: DeskConfig,
    pub client: DeskHubClient,
    /// Session restored from the token store, if the user is logged in.
    pub session: Option<Session>,
}

impl AppContext {
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let client = DeskHubClient::new(&config.api).context("failed to build DeskHub client")?;
        let session = desk_auth::resume_session();
        tracing::debug!(
            base_url = client.base_url(),
            logged_in = session.is_some(),
            "context ready"
        );
        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// The current session, or an error telling the user to log in.
    pub fn require_session(&self) -> anyhow::Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| desk_auth::AuthError::NotAuthenticated.into())
    }
}
