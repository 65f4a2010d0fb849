use super::expiry::ExpiryDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One billing party as read from an input file.
///
/// Every field is optional; only populated fields are applied to a fragment, so
/// an absent column never creates a group.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct BillingRecord {
    pub name_prefix: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub name_suffix: Option<String>,
    pub premise: Option<String>,
    pub street: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub telephone_type: Option<String>,
    /// Amount in major units. Accepts a number (`12.5`) or decimal text (`"12.50"`).
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub payment_type: Option<String>,
    pub pan: Option<String>,
    pub expiry_date: Option<ExpiryDate>,
    pub security_code: Option<String>,
}
