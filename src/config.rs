//! Process configuration.
//!
//! Everything the handlers need from the environment is resolved once at
//! startup and carried in `AppState`; business logic never reads env vars.

use std::path::PathBuf;
use std::time::Duration;

use crate::gateway::Safe2PayClient;

const DEFAULT_GATEWAY_URL: &str = "https://api.safe2pay.com.br/v2";
const DEFAULT_LOGO_URL: &str =
    "https://jsimrqytfiwiayxbdiro.supabase.co/storage/v1/object/public/senalbabucket/Logo/logoSenalba.jpeg";
const DEFAULT_OUTPUT_DIR: &str = "./uploads";
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory for transient report files, created on demand.
    pub output_dir: PathBuf,
    pub gateway_api_key: Option<String>,
    pub gateway_base_url: String,
    pub logo_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let output_dir = std::env::var("RELATORIOS_OUTPUT_DIR")
            .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());
        let gateway_api_key = std::env::var("SAFE2PAY_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if gateway_api_key.is_none() {
            log::warn!(
                "SAFE2PAY_KEY não definida; /relatorios/boletos/geral responderá com erro"
            );
        }
        let gateway_base_url = std::env::var("SAFE2PAY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let logo_url =
            std::env::var("RELATORIOS_LOGO_URL").unwrap_or_else(|_| DEFAULT_LOGO_URL.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        Self {
            output_dir: PathBuf::from(output_dir),
            gateway_api_key,
            gateway_base_url,
            logo_url,
            port,
        }
    }
}

/// Shared per-process state handed to handlers through `web::Data`.
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
    pub gateway: Safe2PayClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(OUTBOUND_TIMEOUT).build()?;
        let gateway = Safe2PayClient::new(
            http.clone(),
            config.gateway_api_key.clone(),
            config.gateway_base_url.clone(),
        );
        Ok(Self {
            config,
            http,
            gateway,
        })
    }
}
