use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Ident, Joins};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(rename = "Ident")]
    pub ident: Option<Ident>,
    /// Single-letter kind: D(ebit), C(redit), T(ransfer), O(pening balance), A(djustment).
    #[serde(rename = "TXType")]
    pub tx_type: String,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Credit")]
    pub credit: Option<Decimal>,
    #[serde(rename = "Debit")]
    pub debit: Option<Decimal>,
    #[serde(rename = "Contact")]
    pub contact: Option<Value>,
    #[serde(rename = "Category")]
    pub category: Option<Value>,
    #[serde(rename = "Project")]
    pub project: Option<Value>,
}

impl Transaction {
    pub fn credit_amount(&self) -> Decimal {
        self.credit.unwrap_or_default()
    }

    pub fn debit_amount(&self) -> Decimal {
        self.debit.unwrap_or_default()
    }
}

impl Joins for Transaction {
    fn joined(&self, field: &str) -> Option<&Map<String, Value>> {
        let value = match field {
            "Contact" => self.contact.as_ref(),
            "Category" => self.category.as_ref(),
            "Project" => self.project.as_ref(),
            _ => None,
        };
        value.and_then(Value::as_object)
    }
}
