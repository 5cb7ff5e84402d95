//! sbanken-client: async client for the Sbanken public API.
//!
//! Authenticates with client credentials, fetches accounts, transactions,
//! cards, payments and eFakturas, and exposes them as typed records.
//! Transactions bridge into `sbanken-core` for date and label normalization.

pub mod accounts;
pub mod cards;
pub mod config;
pub mod connection;
pub mod efaktura;
pub mod envelope;
pub mod error;
pub mod payments;
pub mod transactions;
pub mod transport;

pub use accounts::Account;
pub use cards::Card;
pub use config::{ApiConfig, Credentials};
pub use connection::ApiConnection;
pub use efaktura::{EFaktura, EFakturaPayRequest};
pub use error::{ClientError, Result};
pub use payments::Payment;
pub use transactions::{CardDetails, Transaction};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};
