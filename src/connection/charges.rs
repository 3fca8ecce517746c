use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::raw;
use super::{CreateCustomerRequest, Customer, PixConnection};
use crate::cache::EntityKind;
use crate::endpoints::Operation;
use crate::error::{PixError, PixResult};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChargeRequest {
    #[serde(rename = "correlationID", skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CreateCustomerRequest>,
}

impl CreateChargeRequest {
    fn validate(&self) -> PixResult<()> {
        if self.correlation_id.is_none() {
            return Err(PixError::missing_field("correlationID"));
        }
        if self.value.is_none() {
            return Err(PixError::missing_field("value"));
        }

        Ok(())
    }
}

/// A charge as returned by the API. Fields the response omits are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub status: Option<String>,
    pub customer: Option<Customer>,
    pub value: Option<i64>,
    pub comment: Option<String>,
    #[serde(rename = "correlationID")]
    pub correlation_id: Option<String>,
    #[serde(rename = "paymentLinkID")]
    pub payment_link_id: Option<String>,
    pub payment_link_url: Option<String>,
    pub qr_code_image: Option<String>,
    pub br_code: Option<String>,
    pub expires_in: Option<i64>,
    pub expires_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Charge {
    /// Projects the `charge` subtree of a raw response.
    pub(crate) fn from_raw(value: &Value) -> Self {
        Self {
            status: raw::string(value, "status"),
            customer: value.get("customer").map(Customer::from_raw),
            value: raw::integer(value, "value"),
            comment: raw::string(value, "comment"),
            correlation_id: raw::string(value, "correlationID"),
            payment_link_id: raw::string(value, "paymentLinkID"),
            payment_link_url: raw::string(value, "paymentLinkUrl"),
            qr_code_image: raw::string(value, "qrCodeImage"),
            br_code: raw::string(value, "brCode"),
            expires_in: raw::integer(value, "expiresIn"),
            expires_date: raw::timestamp(value, "expiresDate"),
            created_at: raw::timestamp(value, "createdAt"),
            updated_at: raw::timestamp(value, "updatedAt"),
        }
    }
}

impl PixConnection {
    /// Fetches a charge by id, serving repeat lookups from the connection
    /// cache without another remote call.
    pub async fn get_charge(&self, charge_id: &str) -> PixResult<Charge> {
        let payload = self
            .fetch(EntityKind::Charge, Operation::GetCharge, charge_id)
            .await?;

        Ok(Charge::from_raw(raw::subtree(&payload, "charge")))
    }

    /// Creates a charge. `correlationID` and `value` are required; the
    /// first one missing fails validation before any remote call.
    pub async fn create_charge(&self, body: &CreateChargeRequest) -> PixResult<Charge> {
        body.validate()?;

        let payload = self
            .submit(Operation::CreateCharge, &serde_json::to_value(body)?)
            .await?;

        Ok(Charge::from_raw(raw::subtree(&payload, "charge")))
    }
}
