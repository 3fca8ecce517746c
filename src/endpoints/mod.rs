use std::fmt;

use crate::config::Environment;
use crate::error::{PixError, PixResult};

const PRODUCTION_BASE_URL: &str = "https://api.openpix.com.br";
const TEST_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const MOCK_BASE_URL: &str = "https://raw.githubusercontent.com/openpix-rs/openpix-sdk/main/mocks/";

/// API operations a connection can perform. Each maps to at most one path
/// fragment per environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetCharge,
    CreateCharge,
    GetRefund,
    CreateRefund,
    GetCustomer,
    CreateCustomer,
    GetTransaction,
    CreatePayment,
    ConfirmPayment,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::GetCharge => "getCharge",
            Operation::CreateCharge => "createCharge",
            Operation::GetRefund => "getRefund",
            Operation::CreateRefund => "createRefund",
            Operation::GetCustomer => "getCustomer",
            Operation::CreateCustomer => "createCustomer",
            Operation::GetTransaction => "getTransaction",
            Operation::CreatePayment => "createPayment",
            Operation::ConfirmPayment => "confirmPayment",
        };
        f.write_str(name)
    }
}

pub fn base_url(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => PRODUCTION_BASE_URL,
        Environment::Test => TEST_BASE_URL,
        Environment::Mock => MOCK_BASE_URL,
    }
}

// The test environment deliberately covers only the charge and refund
// operations; jsonplaceholder has nothing to stand in for the rest.
fn path_fragment(environment: Environment, operation: Operation) -> Option<&'static str> {
    use Environment::*;
    use Operation::*;

    let fragment = match (environment, operation) {
        (Production, GetCharge) | (Production, CreateCharge) => "/api/openpix/v1/charge",
        (Production, GetRefund) | (Production, CreateRefund) => "/api/openpix/v1/refund/",
        (Production, GetCustomer) | (Production, CreateCustomer) => "/api/openpix/v1/customer/",
        (Production, GetTransaction) => "/api/openpix/v1/transaction/",
        (Production, CreatePayment) => "/api/openpix/v1/payment/",
        (Production, ConfirmPayment) => "/api/openpix/v1/payment/approve",
        (Test, GetCharge) => "/todos/",
        (Test, CreateCharge) | (Test, GetRefund) | (Test, CreateRefund) => "",
        (Mock, GetCharge) => "chargeMock.json",
        (Mock, CreateCharge) => "createChargeMock.json",
        (Mock, GetRefund) => "refundMock.json",
        (Mock, CreateRefund) => "createRefundMock.json",
        (Mock, GetCustomer) => "customerMock.json",
        (Mock, CreateCustomer) => "createCustomerMock.json",
        (Mock, GetTransaction) => "transactionMock.json",
        (Mock, CreatePayment) => "createPaymentMock.json",
        (Mock, ConfirmPayment) => "confirmPaymentMock.json",
        _ => return None,
    };

    Some(fragment)
}

/// Resolves the full URL for an operation in an environment.
///
/// Fails with [`PixError::Configuration`] when the pair has no entry in the
/// endpoint table; an unknown pair must never produce a silently wrong URL.
pub fn resolve(environment: Environment, operation: Operation) -> PixResult<String> {
    let fragment = path_fragment(environment, operation).ok_or(PixError::Configuration {
        environment,
        operation,
    })?;

    Ok(format!("{}{}", base_url(environment), fragment))
}
