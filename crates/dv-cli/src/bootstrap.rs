use anyhow::Context;

/// Load `.env` (if any) and the layered configuration.
pub fn load_config() -> anyhow::Result<dv_config::DvConfig> {
    let config = dv_config::DvConfig::load_with_dotenv().context("failed to load configuration")?;
    tracing::debug!(
        text_delay_ms = config.analysis.text_delay_ms,
        image_delay_ms = config.analysis.image_delay_ms,
        max_image_bytes = config.analysis.max_image_bytes,
        seeded = config.analysis.seed.is_some(),
        "configuration loaded"
    );
    Ok(config)
}
