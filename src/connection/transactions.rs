use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::raw;
use super::{Charge, Customer, PixConnection};
use crate::cache::EntityKind;
use crate::endpoints::Operation;
use crate::error::PixResult;

/// A settled Pix transaction, with the charge and customer it belongs to
/// when the API includes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub value: Option<i64>,
    pub time: Option<DateTime<Utc>>,
    pub end_to_end_id: Option<String>,
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
    pub charge: Option<Charge>,
    pub customer: Option<Customer>,
}

impl Transaction {
    pub(crate) fn from_raw(value: &Value) -> Self {
        Self {
            value: raw::integer(value, "value"),
            time: raw::timestamp(value, "time"),
            end_to_end_id: raw::string(value, "endToEndId"),
            transaction_id: raw::string(value, "transactionID"),
            charge: value.get("charge").map(Charge::from_raw),
            customer: value.get("customer").map(Customer::from_raw),
        }
    }
}

impl PixConnection {
    pub async fn get_transaction(&self, transaction_id: &str) -> PixResult<Transaction> {
        let payload = self
            .fetch(EntityKind::Transaction, Operation::GetTransaction, transaction_id)
            .await?;

        Ok(Transaction::from_raw(raw::subtree(&payload, "transaction")))
    }
}
