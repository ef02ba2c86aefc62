use anyhow::Context;

/// Load `.env` (if any) and then the layered configuration.
pub fn load_config() -> anyhow::Result<desk_config::DeskConfig> {
    load_dotenv()?;
    desk_config::DeskConfig::load().context("failed to load deskhub configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(anyhow::anyhow!("failed to load .env file: {error}")),
    }
}
