//! Rust client for the OpenPix Pix payment API.
//!
//! A [`PixConnection`] wraps the charge, refund, customer, transaction and
//! payment endpoints behind one method per operation, memoizes single
//! resource lookups for its own lifetime and can point at the production,
//! test or mock environment.
//!
//! ```rust,no_run
//! use openpix_sdk::{CreateChargeRequest, Environment, PixConnection};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), openpix_sdk::PixError> {
//! let pix = PixConnection::new("app-id-token", Environment::Production);
//!
//! let charge = pix
//!     .create_charge(&CreateChargeRequest {
//!         correlation_id: Some("order-1234".to_owned()),
//!         value: Some(100),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("brCode: {:?}", charge.br_code);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod connection;
pub mod endpoints;
pub mod error;
pub mod transport;

pub use config::{Environment, PixConfig};
pub use connection::{
    Charge, ConfirmPaymentRequest, CreateChargeRequest, CreateCustomerRequest,
    CreatePaymentRequest, CreateRefundRequest, Customer, Payment, PixConnection, PixKeyType,
    Refund, TaxId, Transaction,
};
pub use error::{PixError, PixResult};
pub use transport::{HttpCaller, RestCaller};
