use anyhow::Context;

/// Load `.env` then the layered configuration.
pub fn load_config() -> anyhow::Result<folio_config::FolioConfig> {
    folio_config::FolioConfig::load_with_dotenv().context("failed to load folio configuration")
}
