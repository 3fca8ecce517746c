use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::raw;
use super::PixConnection;
use crate::cache::EntityKind;
use crate::endpoints::Operation;
use crate::error::{PixError, PixResult};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_end_to_end_id: Option<String>,
    #[serde(rename = "correlationID", skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateRefundRequest {
    fn validate(&self) -> PixResult<()> {
        if self.value.is_none() {
            return Err(PixError::missing_field("value"));
        }
        if self.transaction_end_to_end_id.is_none() {
            return Err(PixError::missing_field("transactionEndToEndId"));
        }
        if self.correlation_id.is_none() {
            return Err(PixError::missing_field("correlationID"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub status: Option<String>,
    pub value: Option<i64>,
    #[serde(rename = "correlationID")]
    pub correlation_id: Option<String>,
    pub refund_id: Option<String>,
    pub end_to_end_id: Option<String>,
    pub comment: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

impl Refund {
    pub(crate) fn from_raw(value: &Value) -> Self {
        Self {
            status: raw::string(value, "status"),
            value: raw::integer(value, "value"),
            correlation_id: raw::string(value, "correlationID"),
            refund_id: raw::string(value, "refundId"),
            end_to_end_id: raw::string(value, "endToEndId"),
            comment: raw::string(value, "comment"),
            time: raw::timestamp(value, "time"),
        }
    }
}

impl PixConnection {
    pub async fn get_refund(&self, refund_id: &str) -> PixResult<Refund> {
        let payload = self
            .fetch(EntityKind::Refund, Operation::GetRefund, refund_id)
            .await?;

        Ok(Refund::from_raw(raw::subtree(&payload, "refund")))
    }

    /// Creates a refund. Required fields, checked in order: `value`,
    /// `transactionEndToEndId`, `correlationID`.
    pub async fn create_refund(&self, body: &CreateRefundRequest) -> PixResult<Refund> {
        body.validate()?;

        let payload = self
            .submit(Operation::CreateRefund, &serde_json::to_value(body)?)
            .await?;

        Ok(Refund::from_raw(raw::subtree(&payload, "refund")))
    }
}
