//! Company and union-member report handlers.

use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::delivery::{TempReport, PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE};
use crate::relatorios::models::{
    AvisoResponse, EmpresasFiltroRequest, EmpresasRequest, MensagemResponse,
    SindicalizadosFiltroRequest, SindicalizadosRequest,
};
use crate::render::pdf::PdfTableSpec;
use crate::render::{xlsx, Cell, SheetSpec};
use crate::report::columns::{format_headers, selected_columns};
use crate::report::filter::FilterSpec;
use crate::report::project::{RowProjector, ATIVO_INATIVO, PDF_TEXT_LIMIT, SIM_NAO};
use crate::report::{validate, ReportError, ReportFormat};
use crate::{AppState, ErrorResponse};

/// Header label overrides for the member reports.
const SINDICALIZADO_HEADER_OVERRIDES: &[(&str, &str)] =
    &[("status", "Status (Ativo / Inativo)")];

const EMPRESA_HEADER_OVERRIDES: &[(&str, &str)] = &[];

/// Map a pipeline error to its HTTP response. `EmptyResult` renders as 404;
/// endpoints with a soft notice handle it before calling this.
pub(super) fn error_response(error: &ReportError) -> HttpResponse {
    match error {
        ReportError::InvalidInput(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(message))
        }
        ReportError::EmptyResult(message) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found(message))
        }
        other => {
            log::error!("erro ao gerar relatório: {other}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Erro ao gerar relatório."))
        }
    }
}

#[utoipa::path(
    get,
    path = "/relatorios/mensagem",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Health message", body = MensagemResponse)
    )
)]
pub async fn mensagem() -> impl Responder {
    HttpResponse::Ok().json(MensagemResponse {
        sucesso: true,
        mensagem: "✅ Backend de relatórios funcionando corretamente!".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/relatorios/empresas",
    tag = "Relatórios",
    request_body = EmpresasRequest,
    responses(
        (status = 200, description = "Report file download"),
        (status = 400, description = "Invalid shape, format or column selection", body = ErrorResponse),
        (status = 500, description = "Render failure", body = ErrorResponse)
    )
)]
pub async fn empresas(
    state: web::Data<AppState>,
    body: web::Json<EmpresasRequest>,
) -> impl Responder {
    let outcome = relatorio_empresas(
        &state,
        body.empresas.as_ref(),
        body.relatorio_empresa.as_ref(),
        body.formato.as_deref(),
        FilterSpec::new(),
    )
    .await;
    match outcome {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

#[utoipa::path(
    post,
    path = "/relatorios/empresas/filtrar",
    tag = "Relatórios",
    request_body = EmpresasFiltroRequest,
    responses(
        (status = 200, description = "Report file download, or an aviso body when the filter matches nothing"),
        (status = 400, description = "Invalid shape, format or column selection", body = ErrorResponse),
        (status = 500, description = "Render failure", body = ErrorResponse)
    )
)]
pub async fn empresas_filtrar(
    state: web::Data<AppState>,
    body: web::Json<EmpresasFiltroRequest>,
) -> impl Responder {
    let filtros = FilterSpec::new()
        .flag("acordo_coletivo", wants(body.tipo_acordo.as_deref()))
        .flag("convencao_coletiva", wants(body.tipo_convencao.as_deref()));

    let outcome = relatorio_empresas(
        &state,
        body.empresas.as_ref(),
        body.relatorio_empresa.as_ref(),
        body.formato.as_deref(),
        filtros,
    )
    .await;
    match outcome {
        Ok(response) => response,
        // This route answers an empty filter result with a notice, not a 404.
        Err(ReportError::EmptyResult(aviso)) => HttpResponse::Ok().json(AvisoResponse { aviso }),
        Err(error) => error_response(&error),
    }
}

#[utoipa::path(
    post,
    path = "/relatorios/sindicalizados",
    tag = "Relatórios",
    request_body = SindicalizadosRequest,
    responses(
        (status = 200, description = "Spreadsheet download"),
        (status = 400, description = "Invalid shape or column selection", body = ErrorResponse),
        (status = 500, description = "Render failure", body = ErrorResponse)
    )
)]
pub async fn sindicalizados(
    state: web::Data<AppState>,
    body: web::Json<SindicalizadosRequest>,
) -> impl Responder {
    let outcome = relatorio_sindicalizados(
        &state,
        body.sindicalizados.as_ref(),
        body.relatorio_sindicalizado.as_ref(),
        FilterSpec::new(),
    );
    match outcome {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

#[utoipa::path(
    post,
    path = "/relatorios/sindicalizados/filtro",
    tag = "Relatórios",
    request_body = SindicalizadosFiltroRequest,
    responses(
        (status = 200, description = "Spreadsheet download"),
        (status = 400, description = "Invalid shape or column selection", body = ErrorResponse),
        (status = 404, description = "No member matched the filters", body = ErrorResponse),
        (status = 500, description = "Render failure", body = ErrorResponse)
    )
)]
pub async fn sindicalizados_filtro(
    state: web::Data<AppState>,
    body: web::Json<SindicalizadosFiltroRequest>,
) -> impl Responder {
    let filtros = body.filtros.as_ref().cloned().unwrap_or_default();
    let spec = FilterSpec::new()
        .equals("status", filtros.status.as_deref())
        .equals_scalar("id_sindicato", filtros.id_sindicato.as_ref())
        .equals("unidade", filtros.unidade.as_deref())
        .equals("tipo_desconto", filtros.tipo_desconto.as_deref());

    let outcome = relatorio_sindicalizados(
        &state,
        body.sindicalizados.as_ref(),
        body.relatorio_sindicalizado.as_ref(),
        spec,
    );
    match outcome {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

async fn relatorio_empresas(
    state: &AppState,
    empresas: Option<&Value>,
    selecao: Option<&Value>,
    formato: Option<&str>,
    filtros: FilterSpec,
) -> Result<HttpResponse, ReportError> {
    let registros = validate::require_array(empresas, "Empresas inválidas.")?;
    let selecao = validate::require_object(selecao, "Configuração de relatório ausente.")?;
    let formato = validate::require_format(formato)?;
    let colunas = selected_columns(selecao)?;

    let filtrados = filtros.apply(registros);
    if filtrados.is_empty() && !filtros.is_empty() {
        return Err(ReportError::EmptyResult(
            "Nenhuma empresa encontrada para os filtros informados.".to_string(),
        ));
    }

    let cabecalho = format_headers(&colunas, EMPRESA_HEADER_OVERRIDES);

    let bytes = match formato {
        ReportFormat::Xlsx => {
            let projector = RowProjector::new(SIM_NAO);
            let rows: Vec<Vec<Cell>> = filtrados
                .iter()
                .filter_map(Value::as_object)
                .map(|registro| {
                    projector
                        .project(registro, &colunas)
                        .into_iter()
                        .map(Cell::Text)
                        .collect()
                })
                .collect();
            xlsx::write_workbook(&[SheetSpec::table("Empresas", cabecalho, rows)])?
        }
        ReportFormat::Pdf => {
            let projector = RowProjector::truncated(SIM_NAO, PDF_TEXT_LIMIT);
            let rows: Vec<Vec<String>> = filtrados
                .iter()
                .filter_map(Value::as_object)
                .map(|registro| projector.project(registro, &colunas))
                .collect();
            let spec = PdfTableSpec {
                org_name: "Senalba MG".to_string(),
                title: "Relatório de Empresas".to_string(),
                headers: cabecalho,
                rows,
                logo_jpeg: fetch_logo(state).await,
            };
            crate::render::pdf::render_table(&spec)?
        }
    };

    let content_type = match formato {
        ReportFormat::Xlsx => XLSX_CONTENT_TYPE,
        ReportFormat::Pdf => PDF_CONTENT_TYPE,
    };
    let file = TempReport::create(
        &state.config.output_dir,
        "relatorio_empresas",
        formato.extension(),
        &bytes,
    )?;
    Ok(file.into_download(content_type)?)
}

fn relatorio_sindicalizados(
    state: &AppState,
    sindicalizados: Option<&Value>,
    selecao: Option<&Value>,
    filtros: FilterSpec,
) -> Result<HttpResponse, ReportError> {
    let registros = validate::require_array(sindicalizados, "Sindicalizados inválidos.")?;
    let selecao = validate::require_object(selecao, "Configuração de relatório ausente.")?;
    let colunas = selected_columns(selecao)?;

    let filtrados = filtros.apply(registros);
    if filtrados.is_empty() && !filtros.is_empty() {
        return Err(ReportError::EmptyResult(
            "Nenhum sindicalizado encontrado para os filtros informados.".to_string(),
        ));
    }

    let cabecalho = format_headers(&colunas, SINDICALIZADO_HEADER_OVERRIDES);
    let projector = RowProjector::new(ATIVO_INATIVO);
    let rows: Vec<Vec<Cell>> = filtrados
        .iter()
        .filter_map(Value::as_object)
        .map(|registro| {
            projector
                .project(registro, &colunas)
                .into_iter()
                .map(Cell::Text)
                .collect()
        })
        .collect();

    let bytes = xlsx::write_workbook(&[SheetSpec::table("Sindicalizados", cabecalho, rows)])?;
    let file = TempReport::create(
        &state.config.output_dir,
        "relatorio_sindicalizados",
        "xlsx",
        &bytes,
    )?;
    Ok(file.into_download(XLSX_CONTENT_TYPE)?)
}

fn wants(value: Option<&str>) -> bool {
    value.map(|text| !text.trim().is_empty()).unwrap_or(false)
}

/// Fetch the report logo. Any failure degrades to a logo-less document.
async fn fetch_logo(state: &AppState) -> Option<Vec<u8>> {
    let response = match state.http.get(&state.config.logo_url).send().await {
        Ok(response) => response,
        Err(error) => {
            log::warn!("logo não carregada, continuando sem imagem: {error}");
            return None;
        }
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(error) => {
            log::warn!("logo não carregada, continuando sem imagem: {error}");
            return None;
        }
    };
    match response.bytes().await {
        Ok(bytes) => Some(bytes.to_vec()),
        Err(error) => {
            log::warn!("logo não carregada, continuando sem imagem: {error}");
            None
        }
    }
}
