use apiclient::endpoints::health_check;
use apiclient::{ApiClient, ClientConfiguration, TransportSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match TransportSettings::default_path() {
        Some(path) => TransportSettings::load(&path)?,
        None => TransportSettings::default(),
    };
    let client = ApiClient::new(ClientConfiguration::from_env().with_settings(settings))?;
    let config = client.config();
    tracing::info!(
        base_url = %config.base_url,
        with_credentials = config.with_credentials,
        timeout = ?config.settings.timeout,
        "using api client"
    );

    let health = health_check(&client).await?;
    println!("{}", serde_json::to_string_pretty(&health)?);

    if !health.is_ok() {
        anyhow::bail!("api status is {:?}", health.status);
    }
    Ok(())
}
