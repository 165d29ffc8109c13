use serde::Deserialize;

use super::Ident;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Institution {
    #[serde(rename = "Ident")]
    pub ident: Option<Ident>,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Institution {
    pub fn href(&self) -> Option<String> {
        self.ident.as_ref().map(|id| format!("/institution/{id}"))
    }
}
