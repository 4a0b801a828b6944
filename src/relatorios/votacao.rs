//! Voting report: one sheet with every vote, one with the tally.
//!
//! The tally keeps choices in first-seen order and marks the winner column
//! with `SIM` for a unique maximum or `EMPATE` on every tied maximum.

use actix_web::{web, HttpResponse, Responder};
use serde_json::{Map, Value};

use crate::delivery::{attachment_response, XLSX_CONTENT_TYPE};
use crate::relatorios::handlers::error_response;
use crate::relatorios::models::VotacaoRequest;
use crate::render::{xlsx, Cell, ColumnWidths, SheetSpec};
use crate::report::project::{display_scalar, SIM_NAO};
use crate::report::{validate, ReportError};

const NAO_INFORMADO: &str = "Não informado";

#[utoipa::path(
    post,
    path = "/relatorios/votacao",
    tag = "Relatórios",
    request_body = VotacaoRequest,
    responses(
        (status = 200, description = "Spreadsheet attachment with detail and tally sheets"),
        (status = 400, description = "dados is not a list", body = crate::ErrorResponse),
        (status = 500, description = "Render failure", body = crate::ErrorResponse)
    )
)]
pub async fn votacao(body: web::Json<VotacaoRequest>) -> impl Responder {
    match relatorio_votacao(&body) {
        Ok(response) => response,
        Err(error) => error_response(&error),
    }
}

fn relatorio_votacao(body: &VotacaoRequest) -> Result<HttpResponse, ReportError> {
    let dados = validate::require_array(body.dados.as_ref(), "dados deve ser uma lista.")?;

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(dados.len());
    let mut contagem: Vec<(String, usize)> = Vec::new();

    for item in dados.iter().filter_map(Value::as_object) {
        let escolha = taxa_negocial(item);
        match contagem.iter_mut().find(|(opcao, _)| *opcao == escolha) {
            Some(entrada) => entrada.1 += 1,
            None => contagem.push((escolha.clone(), 1)),
        }

        rows.push(vec![
            texto(item, "nome"),
            texto(item, "cpf"),
            texto(item, "telefone"),
            texto(item, "email"),
            texto(item, "nome_empresa"),
            Cell::Text(escolha),
            texto(item, "opositor"),
            texto(item, "outro_nome_empresa"),
        ]);
    }

    let detalhe = SheetSpec {
        column_widths: ColumnWidths::PerColumn(vec![
            30.0, 20.0, 20.0, 30.0, 30.0, 20.0, 12.0, 30.0,
        ]),
        ..SheetSpec::table(
            "Relatório Votação",
            vec![
                "Nome".to_string(),
                "CPF".to_string(),
                "Telefone".to_string(),
                "Email".to_string(),
                "Empresa".to_string(),
                "Taxa Negocial (Escolha)".to_string(),
                "Opositor".to_string(),
                "Outra Empresa".to_string(),
            ],
            rows,
        )
    };

    let resumo = resumo_sheet(&contagem, dados.len());

    let bytes = xlsx::write_workbook(&[detalhe, resumo])?;
    Ok(attachment_response(
        bytes,
        "relatorio_votacao.xlsx",
        XLSX_CONTENT_TYPE,
    ))
}

fn resumo_sheet(contagem: &[(String, usize)], total_votos: usize) -> SheetSpec {
    let maior = contagem.iter().map(|(_, qtd)| *qtd).max().unwrap_or(0);
    let vencedora_unica = contagem.iter().filter(|(_, qtd)| *qtd == maior).count() == 1;

    let rows: Vec<Vec<Cell>> = contagem
        .iter()
        .map(|(opcao, qtd)| {
            let percentual = if total_votos == 0 {
                "0.00%".to_string()
            } else {
                format!("{:.2}%", (*qtd as f64 / total_votos as f64) * 100.0)
            };
            let vencedora = if *qtd == maior {
                if vencedora_unica {
                    "SIM"
                } else {
                    "EMPATE"
                }
            } else {
                ""
            };
            vec![
                Cell::Text(opcao.clone()),
                Cell::Number(*qtd as f64),
                Cell::Text(percentual),
                Cell::Text(vencedora.to_string()),
            ]
        })
        .collect();

    SheetSpec {
        header_fill: 0xEEEEEE,
        column_widths: ColumnWidths::PerColumn(vec![20.0, 25.0, 20.0, 15.0]),
        ..SheetSpec::table(
            "Resumo",
            vec![
                "Opção".to_string(),
                "Quantidade de Votos".to_string(),
                "Percentual".to_string(),
                "Vencedora".to_string(),
            ],
            rows,
        )
    }
}

fn taxa_negocial(item: &Map<String, Value>) -> String {
    match item.get("taxa_negocial").and_then(Value::as_str) {
        Some(escolha) if !escolha.trim().is_empty() => escolha.to_string(),
        _ => NAO_INFORMADO.to_string(),
    }
}

fn texto(item: &Map<String, Value>, campo: &str) -> Cell {
    Cell::Text(display_scalar(item.get(campo), SIM_NAO))
}
