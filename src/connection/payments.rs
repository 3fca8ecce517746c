use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw;
use super::PixConnection;
use crate::endpoints::Operation;
use crate::error::{PixError, PixResult};

/// Kind of the destination Pix key of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PixKeyType {
    Cpf,
    Cnpj,
    Email,
    Phone,
    Random,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[serde(rename = "correlationID", skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_key_type: Option<PixKeyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreatePaymentRequest {
    fn validate(&self) -> PixResult<()> {
        if self.correlation_id.is_none() {
            return Err(PixError::missing_field("correlationID"));
        }
        if self.pix_key.is_none() {
            return Err(PixError::missing_field("pixKey"));
        }
        if self.pix_key_type.is_none() {
            return Err(PixError::missing_field("pixKeyType"));
        }
        if self.value.is_none() {
            return Err(PixError::missing_field("value"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[serde(rename = "correlationID", skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl ConfirmPaymentRequest {
    fn validate(&self) -> PixResult<()> {
        if self.correlation_id.is_none() {
            return Err(PixError::missing_field("correlationID"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub status: Option<String>,
    pub value: Option<i64>,
    pub destination_alias: Option<String>,
    #[serde(rename = "correlationID")]
    pub correlation_id: Option<String>,
    pub comment: Option<String>,
    pub source_account_id: Option<String>,
}

impl Payment {
    pub(crate) fn from_raw(value: &Value) -> Self {
        Self {
            status: raw::string(value, "status"),
            value: raw::integer(value, "value"),
            destination_alias: raw::string(value, "destinationAlias"),
            correlation_id: raw::string(value, "correlationID"),
            comment: raw::string(value, "comment"),
            source_account_id: raw::string(value, "sourceAccountId"),
        }
    }
}

impl PixConnection {
    /// Requests a payment to a Pix key. Required fields, checked in order:
    /// `correlationID`, `pixKey`, `pixKeyType`, `value`.
    pub async fn start_payment(&self, body: &CreatePaymentRequest) -> PixResult<Payment> {
        body.validate()?;

        let payload = self
            .submit(Operation::CreatePayment, &serde_json::to_value(body)?)
            .await?;

        Ok(Payment::from_raw(raw::subtree(&payload, "payment")))
    }

    /// Approves a previously requested payment by its `correlationID`.
    pub async fn confirm_payment(&self, body: &ConfirmPaymentRequest) -> PixResult<Payment> {
        body.validate()?;

        let payload = self
            .submit(Operation::ConfirmPayment, &serde_json::to_value(body)?)
            .await?;

        Ok(Payment::from_raw(raw::subtree(&payload, "payment")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_order_for_start_payment() {
        let error = CreatePaymentRequest::default().validate().unwrap_err();
        assert!(matches!(
            error,
            PixError::Validation {
                field: "correlationID"
            }
        ));

        let error = CreatePaymentRequest {
            correlation_id: Some("pay-1".to_owned()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(error, PixError::Validation { field: "pixKey" }));

        let error = CreatePaymentRequest {
            correlation_id: Some("pay-1".to_owned()),
            pix_key: Some("dan@example.com".to_owned()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(error, PixError::Validation { field: "pixKeyType" }));

        let error = CreatePaymentRequest {
            correlation_id: Some("pay-1".to_owned()),
            pix_key: Some("dan@example.com".to_owned()),
            pix_key_type: Some(PixKeyType::Email),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(error, PixError::Validation { field: "value" }));
    }

    #[test]
    fn test_confirm_payment_requires_correlation_id() {
        let error = ConfirmPaymentRequest::default().validate().unwrap_err();
        assert!(matches!(
            error,
            PixError::Validation {
                field: "correlationID"
            }
        ));
    }

    #[test]
    fn test_pix_key_type_serializes_upper_case() {
        let body = CreatePaymentRequest {
            correlation_id: Some("pay-1".to_owned()),
            pix_key: Some("dan@example.com".to_owned()),
            pix_key_type: Some(PixKeyType::Email),
            value: Some(100),
            ..Default::default()
        };

        let serialized = serde_json::to_value(&body).unwrap();

        assert_eq!(serialized["pixKeyType"], json!("EMAIL"));
        assert_eq!(serialized["pixKey"], json!("dan@example.com"));
    }

    #[test]
    fn test_mapper_surfaces_absent_fields_as_none() {
        let payment = Payment::from_raw(&json!({"status": "CREATED"}));

        assert_eq!(payment.status.as_deref(), Some("CREATED"));
        assert_eq!(payment.value, None);
        assert_eq!(payment.destination_alias, None);
    }
}
