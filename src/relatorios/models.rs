//! Request and response bodies for the report endpoints.
//!
//! Record lists and column selections are kept as raw JSON values so that a
//! wrong shape turns into a descriptive 400 from the validator instead of a
//! deserialization error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmpresasRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub empresas: Option<Value>,
    #[serde(rename = "relatorioEmpresa")]
    #[schema(value_type = Option<Object>)]
    pub relatorio_empresa: Option<Value>,
    pub formato: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmpresasFiltroRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub empresas: Option<Value>,
    #[serde(rename = "relatorioEmpresa")]
    #[schema(value_type = Option<Object>)]
    pub relatorio_empresa: Option<Value>,
    pub formato: Option<String>,
    /// When present, only companies with a collective agreement are kept.
    #[serde(rename = "tipoAcordo")]
    pub tipo_acordo: Option<String>,
    /// When present, only companies under a collective convention are kept.
    #[serde(rename = "tipoConvencao")]
    pub tipo_convencao: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SindicalizadosRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub sindicalizados: Option<Value>,
    #[serde(rename = "relatorioSindicalizado")]
    #[schema(value_type = Option<Object>)]
    pub relatorio_sindicalizado: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SindicalizadosFiltroRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub sindicalizados: Option<Value>,
    #[serde(rename = "relatorioSindicalizado")]
    #[schema(value_type = Option<Object>)]
    pub relatorio_sindicalizado: Option<Value>,
    #[serde(default)]
    pub filtros: Option<MemberFilters>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MemberFilters {
    pub status: Option<String>,
    /// Organization id; may arrive as a number or a string.
    #[schema(value_type = Option<String>)]
    pub id_sindicato: Option<Value>,
    pub unidade: Option<String>,
    pub tipo_desconto: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DespesaMensalRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub dados: Option<Value>,
    pub data_inicio: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VotacaoRequest {
    #[schema(value_type = Option<Vec<Object>>)]
    pub dados: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BoletosRequest {
    #[serde(rename = "dataInicial")]
    pub data_inicial: Option<String>,
    #[serde(rename = "dataFinal")]
    pub data_final: Option<String>,
    pub application: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MensagemResponse {
    pub sucesso: bool,
    pub mensagem: String,
}

/// Soft empty-result notice returned with a 200 instead of an error.
#[derive(Debug, Serialize, ToSchema)]
pub struct AvisoResponse {
    pub aviso: String,
}
