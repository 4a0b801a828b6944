//! Monthly expense report.
//!
//! Keeps only the entries whose `date_despesa` falls in the month of
//! `data_inicio` and renders a titled three-column sheet returned straight
//! from memory as an attachment.

use actix_web::{web, HttpResponse, Responder};
use serde_json::{Map, Value};

use crate::delivery::{attachment_response, XLSX_CONTENT_TYPE};
use crate::relatorios::handlers::error_response;
use crate::relatorios::models::DespesaMensalRequest;
use crate::render::{xlsx, Cell, ColumnWidths, SheetSpec};
use crate::report::dates::{format_date_br, month_name, parse_year_month};
use crate::report::{validate, ReportError};

#[utoipa::path(
    post,
    path = "/relatorios/despesa-mensal",
    tag = "Relatórios",
    request_body = DespesaMensalRequest,
    responses(
        (status = 200, description = "Spreadsheet attachment"),
        (status = 400, description = "Missing start date or empty data", body = crate::ErrorResponse),
        (status = 500, description = "Render failure", body = crate::ErrorResponse)
    )
)]
pub async fn despesa_mensal(body: web::Json<DespesaMensalRequest>) -> impl Responder {
    match relatorio_despesas(&body) {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

fn relatorio_despesas(body: &DespesaMensalRequest) -> Result<HttpResponse, ReportError> {
    let data_inicio =
        validate::require_text(body.data_inicio.as_deref(), "data_inicio é obrigatória.")?;
    let dados = validate::require_array(
        body.dados.as_ref(),
        "dados deve ser uma lista e não pode estar vazia.",
    )?;
    if dados.is_empty() {
        return Err(ReportError::InvalidInput(
            "dados deve ser uma lista e não pode estar vazia.".to_string(),
        ));
    }
    let (ano, mes) = parse_year_month(data_inicio)
        .ok_or_else(|| ReportError::InvalidInput("data_inicio inválida.".to_string()))?;

    let despesas: Vec<&Map<String, Value>> = dados
        .iter()
        .filter_map(Value::as_object)
        .filter(|item| {
            item.get("date_despesa")
                .and_then(Value::as_str)
                .and_then(parse_year_month)
                == Some((ano, mes))
        })
        .collect();

    let rows: Vec<Vec<Cell>> = despesas
        .iter()
        .map(|item| {
            vec![
                Cell::Text(format_date_br(
                    item.get("date_despesa").and_then(Value::as_str).unwrap_or(""),
                )),
                Cell::Text(
                    item.get("descricao")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                ),
                Cell::Money(item.get("valor").and_then(Value::as_f64).unwrap_or(0.0)),
            ]
        })
        .collect();

    let sheet = SheetSpec {
        title: Some(format!("Despesas Mensais {} {}", month_name(mes), ano)),
        column_widths: ColumnWidths::PerColumn(vec![15.0, 40.0, 15.0]),
        ..SheetSpec::table(
            "Despesas",
            vec![
                "Data".to_string(),
                "Descrição".to_string(),
                "Valor (R$)".to_string(),
            ],
            rows,
        )
    };

    let bytes = xlsx::write_workbook(&[sheet])?;
    Ok(attachment_response(
        bytes,
        &format!("despesas_{mes}_{ano}.xlsx"),
        XLSX_CONTENT_TYPE,
    ))
}
