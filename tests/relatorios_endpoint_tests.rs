use actix_web::http::header;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use tempfile::TempDir;

use senalba_relatorios_server::{relatorios, AppConfig, AppState};

#[cfg(test)]
mod relatorios_endpoint_tests {
    use super::*;

    /// State pointing every outbound URL at a closed local port, so network
    /// paths fail fast instead of leaving the test hanging.
    fn test_state(output_dir: &TempDir) -> web::Data<AppState> {
        let config = AppConfig {
            output_dir: output_dir.path().to_path_buf(),
            gateway_api_key: None,
            gateway_base_url: "http://127.0.0.1:9".to_string(),
            logo_url: "http://127.0.0.1:9/logo.jpeg".to_string(),
            port: 8080,
        };
        web::Data::new(AppState::new(config).expect("failed to build test state"))
    }

    fn empresas_body(formato: &str) -> Value {
        json!({
            "empresas": [
                {"nome": "Acme", "cidade": "Recife", "acordo_coletivo": true},
                {"nome": "Beta", "cidade": "Olinda", "acordo_coletivo": false}
            ],
            "relatorioEmpresa": {"nome": true, "cidade": true},
            "formato": formato
        })
    }

    #[actix_web::test]
    async fn mensagem_reports_health() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let req = test::TestRequest::get().uri("/relatorios/mensagem").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["sucesso"], json!(true));
    }

    #[actix_web::test]
    async fn empresas_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/relatorios/empresas")
            .set_json(empresas_body("csv"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Formato inválido. Use 'xlsx' ou 'pdf'.");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn empresas_rejects_empty_column_selection() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "empresas": [{"nome": "Acme"}],
            "relatorioEmpresa": {"nome": false, "cidade": false},
            "formato": "xlsx"
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/empresas")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Nenhuma coluna selecionada.");
    }

    #[actix_web::test]
    async fn empresas_downloads_a_spreadsheet() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/relatorios/empresas")
            .set_json(empresas_body("xlsx"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("attachment"));
        assert!(disposition.contains("relatorio_empresas"));

        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
        // The transient file is removed once the response is built.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn empresas_downloads_a_pdf_without_a_reachable_logo() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/relatorios/empresas")
            .set_json(empresas_body("pdf"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert!(body.starts_with(b"%PDF"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn empresas_filtrar_answers_with_a_notice_when_nothing_matches() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "empresas": [
                {"nome": "Acme", "convencao_coletiva": false},
                {"nome": "Beta"}
            ],
            "relatorioEmpresa": {"nome": true},
            "formato": "xlsx",
            "tipoConvencao": "convencao"
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/empresas/filtrar")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["aviso"],
            "Nenhuma empresa encontrada para os filtros informados."
        );
    }

    #[actix_web::test]
    async fn empresas_filtrar_keeps_flagged_companies() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "empresas": [
                {"nome": "Acme", "acordo_coletivo": true},
                {"nome": "Beta", "acordo_coletivo": false}
            ],
            "relatorioEmpresa": {"nome": true},
            "formato": "xlsx",
            "tipoAcordo": "acordo"
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/empresas/filtrar")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
    }

    #[actix_web::test]
    async fn sindicalizados_downloads_a_spreadsheet() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "sindicalizados": [
                {"nome": "Maria", "status": true, "tipo_desconto": "mensalidade"}
            ],
            "relatorioSindicalizado": {"nome": true, "status": true, "tipo_desconto": true}
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/sindicalizados")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn sindicalizados_filtro_is_404_when_no_member_matches() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "sindicalizados": [
                {"nome": "Maria", "unidade": "Matriz"},
                {"nome": "José", "unidade": "Filial"}
            ],
            "relatorioSindicalizado": {"nome": true},
            "filtros": {"unidade": "Interior"}
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/sindicalizados/filtro")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Nenhum sindicalizado encontrado para os filtros informados."
        );
    }

    #[actix_web::test]
    async fn sindicalizados_filtro_matches_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "sindicalizados": [
                {"nome": "Maria", "unidade": "  MATRIZ ", "id_sindicato": 3},
                {"nome": "José", "unidade": "Filial", "id_sindicato": 3}
            ],
            "relatorioSindicalizado": {"nome": true, "unidade": true},
            "filtros": {"unidade": "matriz", "id_sindicato": "3"}
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/sindicalizados/filtro")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
    }

    #[actix_web::test]
    async fn despesa_mensal_requires_a_start_date() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({"dados": [{"descricao": "Papel", "valor": 10.0}]});
        let req = test::TestRequest::post()
            .uri("/relatorios/despesa-mensal")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "data_inicio é obrigatória.");
    }

    #[actix_web::test]
    async fn despesa_mensal_downloads_the_month_report() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "data_inicio": "2024-05-01",
            "dados": [
                {"date_despesa": "2024-05-10", "descricao": "Papel", "valor": 10.5},
                {"date_despesa": "2024-06-02", "descricao": "Tinta", "valor": 99.0}
            ]
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/despesa-mensal")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("despesas_5_2024.xlsx"));

        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
    }

    #[actix_web::test]
    async fn votacao_rejects_a_non_list_payload() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({"dados": {"nome": "Maria"}});
        let req = test::TestRequest::post()
            .uri("/relatorios/votacao")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "dados deve ser uma lista.");
    }

    #[actix_web::test]
    async fn votacao_downloads_detail_and_tally_sheets() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({
            "dados": [
                {"nome": "Maria", "taxa_negocial": "Sim", "opositor": false},
                {"nome": "José", "taxa_negocial": "Não", "opositor": true},
                {"nome": "Ana", "taxa_negocial": "Sim"}
            ]
        });
        let req = test::TestRequest::post()
            .uri("/relatorios/votacao")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("relatorio_votacao.xlsx"));

        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
    }

    #[actix_web::test]
    async fn boletos_requires_the_date_range() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({"dataInicial": "2024-01-01"});
        let req = test::TestRequest::post()
            .uri("/relatorios/boletos/geral")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "dataInicial e dataFinal são obrigatórios.");
    }

    #[actix_web::test]
    async fn boletos_fails_cleanly_without_an_api_key() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(test_state(&dir))
                .service(web::scope("/relatorios").configure(relatorios::config)),
        )
        .await;

        let body = json!({"dataInicial": "2024-01-01", "dataFinal": "2024-01-31"});
        let req = test::TestRequest::post()
            .uri("/relatorios/boletos/geral")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Erro ao gerar relatório.");
    }
}
