//! Payment-slip report over the Safe2Pay transaction listing.

use actix_web::{web, HttpResponse, Responder};

use crate::delivery::{TempReport, XLSX_CONTENT_TYPE};
use crate::relatorios::handlers::error_response;
use crate::relatorios::models::{AvisoResponse, BoletosRequest};
use crate::render::{xlsx, Cell, ColumnWidths, SheetSpec};
use crate::report::dates::{format_date_br, format_datetime_br};
use crate::report::{validate, ReportError};
use crate::AppState;

const CABECALHO: [&str; 11] = [
    "Empresa",
    "CNPJ",
    "Email",
    "Telefone",
    "Status",
    "Tipo",
    "Data Criação",
    "Data Pagamento",
    "Valor",
    "Taxa",
    "Vencimento",
];

#[utoipa::path(
    post,
    path = "/relatorios/boletos/geral",
    tag = "Relatórios",
    request_body = BoletosRequest,
    responses(
        (status = 200, description = "Spreadsheet download, or an aviso body when no transaction matched"),
        (status = 400, description = "Missing date range", body = crate::ErrorResponse),
        (status = 500, description = "Gateway or render failure", body = crate::ErrorResponse)
    )
)]
pub async fn boletos_geral(
    state: web::Data<AppState>,
    body: web::Json<BoletosRequest>,
) -> impl Responder {
    match relatorio_boletos(&state, &body).await {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

async fn relatorio_boletos(
    state: &AppState,
    body: &BoletosRequest,
) -> Result<HttpResponse, ReportError> {
    let mensagem = "dataInicial e dataFinal são obrigatórios.";
    let inicio = validate::require_text(body.data_inicial.as_deref(), mensagem)?;
    let fim = validate::require_text(body.data_final.as_deref(), mensagem)?;

    let transacoes = state
        .gateway
        .list_transactions(inicio, fim, body.application.as_deref())
        .await
        .map_err(|error| ReportError::Upstream(error.to_string()))?;

    if transacoes.is_empty() {
        return Ok(HttpResponse::Ok().json(AvisoResponse {
            aviso: "Nenhum boleto encontrado.".to_string(),
        }));
    }

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(transacoes.len());
    let mut total_recebido = 0.0;
    let mut total_a_receber = 0.0;

    for transacao in &transacoes {
        let cliente = transacao.customer.clone().unwrap_or_default();
        let boleto = transacao.payment_object.clone().unwrap_or_default();
        let valor = transacao.splits.first().map(|s| s.amount).unwrap_or(0.0);

        let status = match transacao.message.as_str() {
            "Liberado" => "A Receber".to_string(),
            "Autorizado" => "Pago".to_string(),
            outro => outro.to_string(),
        };
        if status == "Pago" {
            total_recebido += valor;
        }
        if status == "A Receber" {
            total_a_receber += valor;
        }

        rows.push(vec![
            Cell::Text(cliente.name),
            Cell::Text(cliente.identity),
            Cell::Text(cliente.email),
            Cell::Text(cliente.phone),
            Cell::Text(status),
            Cell::Text(transacao.application.clone()),
            Cell::Text(format_date_br(&transacao.created_date)),
            Cell::Text(format_datetime_br(&transacao.created_date_time)),
            Cell::Money(valor),
            match transacao.tax_value {
                Some(taxa) => Cell::Money(taxa),
                None => Cell::Text(String::new()),
            },
            Cell::Text(format_date_br(&boleto.due_date)),
        ]);
    }

    let sheet = SheetSpec {
        footer: vec![
            vec![
                Cell::Text("TOTAL RECEBIDO (Pago)".to_string()),
                Cell::Money(total_recebido),
            ],
            vec![
                Cell::Text("TOTAL A RECEBER (Liberado)".to_string()),
                Cell::Money(total_a_receber),
            ],
        ],
        header_fill: 0x4472C4,
        header_on_dark: true,
        autofilter: true,
        column_widths: ColumnWidths::Fixed(22.0),
        ..SheetSpec::table(
            "Boletos",
            CABECALHO.iter().map(|h| h.to_string()).collect(),
            rows,
        )
    };

    let bytes = xlsx::write_workbook(&[sheet])?;
    let file = TempReport::create(&state.config.output_dir, "relatorio_boletos", "xlsx", &bytes)?;
    Ok(file.into_download(XLSX_CONTENT_TYPE)?)
}
