use serde::Serialize;
use serde_json::Value;

use super::raw;
use super::PixConnection;
use crate::cache::EntityKind;
use crate::endpoints::Operation;
use crate::error::{PixError, PixResult};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "taxID", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl CreateCustomerRequest {
    fn validate(&self) -> PixResult<()> {
        if self.name.is_none() {
            return Err(PixError::missing_field("name"));
        }

        Ok(())
    }
}

/// Tax document of a customer (`taxID` subtree), CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxId {
    #[serde(rename = "taxID")]
    pub tax_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TaxId {
    pub(crate) fn from_raw(value: &Value) -> Self {
        Self {
            tax_id: raw::string(value, "taxID"),
            kind: raw::string(value, "type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "correlationID")]
    pub correlation_id: Option<String>,
    #[serde(rename = "taxID")]
    pub tax_id: Option<TaxId>,
}

impl Customer {
    pub(crate) fn from_raw(value: &Value) -> Self {
        Self {
            name: raw::string(value, "name"),
            email: raw::string(value, "email"),
            phone: raw::string(value, "phone"),
            correlation_id: raw::string(value, "correlationID"),
            tax_id: value.get("taxID").map(TaxId::from_raw),
        }
    }
}

impl PixConnection {
    pub async fn get_customer(&self, customer_id: &str) -> PixResult<Customer> {
        let payload = self
            .fetch(EntityKind::Customer, Operation::GetCustomer, customer_id)
            .await?;

        Ok(Customer::from_raw(raw::subtree(&payload, "customer")))
    }

    /// Creates a customer. Only `name` is required.
    pub async fn create_customer(&self, body: &CreateCustomerRequest) -> PixResult<Customer> {
        body.validate()?;

        let payload = self
            .submit(Operation::CreateCustomer, &serde_json::to_value(body)?)
            .await?;

        Ok(Customer::from_raw(raw::subtree(&payload, "customer")))
    }
}
