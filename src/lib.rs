use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod delivery;
pub mod gateway;
pub mod relatorios;
pub mod render;
pub mod report;

pub use crate::config::{AppConfig, AppState};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::relatorios::handlers::mensagem,
            crate::relatorios::handlers::empresas,
            crate::relatorios::handlers::empresas_filtrar,
            crate::relatorios::handlers::sindicalizados,
            crate::relatorios::handlers::sindicalizados_filtro,
            crate::relatorios::despesas::despesa_mensal,
            crate::relatorios::boletos::boletos_geral,
            crate::relatorios::votacao::votacao
        ),
        components(
            schemas(
                relatorios::models::EmpresasRequest,
                relatorios::models::EmpresasFiltroRequest,
                relatorios::models::SindicalizadosRequest,
                relatorios::models::SindicalizadosFiltroRequest,
                relatorios::models::MemberFilters,
                relatorios::models::DespesaMensalRequest,
                relatorios::models::VotacaoRequest,
                relatorios::models::BoletosRequest,
                relatorios::models::MensagemResponse,
                relatorios::models::AvisoResponse,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Relatórios", description = "Geração de relatórios XLSX e PDF.")
        )
    )]
    struct ApiDoc;

    let config = AppConfig::from_env();
    let port = config.port;
    let app_state = match AppState::new(config) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to build the outbound HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("senalba_relatorios_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://0.0.0.0:{port}");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(web::scope("/relatorios").configure(relatorios::config))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .max_connections(25000)
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
