use rust_decimal::Decimal;
use serde::Deserialize;

use super::{Ident, Institution};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(rename = "Ident")]
    pub ident: Option<Ident>,
    #[serde(rename = "AccName")]
    pub name: String,
    #[serde(rename = "AccNr")]
    pub number: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "OpeningDate")]
    pub opening_date: Option<String>,
    #[serde(rename = "OpeningBalance")]
    pub opening_balance: Option<Decimal>,
    #[serde(rename = "CurrentBalance")]
    pub current_balance: Option<Decimal>,
    /// Denormalised copy of the owning institution, present on most account payloads.
    #[serde(rename = "InstIdent")]
    pub institution_ident: Option<Ident>,
    #[serde(rename = "InstName")]
    pub institution_name: String,
}

impl Account {
    pub fn href(&self) -> Option<String> {
        self.ident.as_ref().map(|id| format!("/account/{id}"))
    }

    /// Current balance, absent counting as zero.
    pub fn balance(&self) -> Decimal {
        self.current_balance.unwrap_or_default()
    }

    /// The institution to link to: the joined parent when the backend sent one,
    /// otherwise whatever the account itself carries.
    pub fn institution(&self, joined: Option<&Institution>) -> Option<Institution> {
        if let Some(inst) = joined.filter(|i| i.ident.is_some()) {
            return Some(inst.clone());
        }
        self.institution_ident.as_ref().map(|id| Institution {
            ident: Some(id.clone()),
            name: self.institution_name.clone(),
        })
    }
}
