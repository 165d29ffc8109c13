use rust_decimal::Decimal;
use serde::Deserialize;

use super::Ident;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(rename = "Ident")]
    pub ident: Option<Ident>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Aggregate of the category's transactions, computed by the backend.
    #[serde(rename = "CurrentBalance")]
    pub current_balance: Option<Decimal>,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
