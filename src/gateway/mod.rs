//! Safe2Pay transaction listing client.
//!
//! Thin typed wrapper over the `GET /transaction/list` endpoint used by the
//! boletos report. The HTTP client is shared with the rest of the process
//! and carries an explicit timeout; there are no retries.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("chave da API Safe2Pay não configurada")]
    MissingApiKey,
    #[error("falha ao consultar a Safe2Pay: {0}")]
    Request(#[from] reqwest::Error),
}

pub struct Safe2PayClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl Safe2PayClient {
    pub fn new(http: Client, api_key: Option<String>, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
        }
    }

    /// List transactions created inside the date range. A single page of up
    /// to 1000 rows, matching the upstream report query.
    pub async fn list_transactions(
        &self,
        created_from: &str,
        created_until: &str,
        application: Option<&str>,
    ) -> Result<Vec<Transaction>, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        let url = format!("{}/transaction/list", self.base_url);
        let mut query: Vec<(&str, String)> = vec![
            ("PageNumber", "1".to_string()),
            ("RowsPerPage", "1000".to_string()),
            ("CreatedDateInitial", created_from.to_string()),
            ("CreatedDateEnd", created_until.to_string()),
        ];
        if let Some(application) = application {
            if !application.trim().is_empty() {
                query.push(("Object.Application", application.to_string()));
            }
        }

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header("X-API-KEY", api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body: TransactionList = response.json().await?;
        Ok(body
            .response_detail
            .map(|detail| detail.objects)
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Customer", default)]
    pub customer: Option<Customer>,
    #[serde(rename = "PaymentObject", default)]
    pub payment_object: Option<PaymentObject>,
    #[serde(rename = "Splits", default)]
    pub splits: Vec<Split>,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "Application", default)]
    pub application: String,
    #[serde(rename = "CreatedDate", default)]
    pub created_date: String,
    #[serde(rename = "CreatedDateTime", default)]
    pub created_date_time: String,
    #[serde(rename = "TaxValue", default)]
    pub tax_value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Customer {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Identity", default)]
    pub identity: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone", default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentObject {
    #[serde(rename = "DueDate", default)]
    pub due_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Split {
    #[serde(rename = "Amount", default)]
    pub amount: f64,
}

#[derive(Deserialize)]
struct TransactionList {
    #[serde(rename = "ResponseDetail")]
    response_detail: Option<ResponseDetail>,
}

#[derive(Deserialize)]
struct ResponseDetail {
    #[serde(rename = "Objects", default)]
    objects: Vec<Transaction>,
}
