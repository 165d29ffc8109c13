use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Backend identifier. Stable within an entity type, sent either as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Ident {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Render a scalar JSON value the way it would appear in a URL or a table cell.
/// Objects, arrays and `null` have no scalar text.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Records that carry joined sub-records (contact, category, ...) by field name.
pub trait Joins {
    fn joined(&self, field: &str) -> Option<&Map<String, Value>>;
}

impl Joins for Value {
    fn joined(&self, field: &str) -> Option<&Map<String, Value>> {
        self.get(field).and_then(Value::as_object)
    }
}

/// One element of a list response: the entity, and the parent the backend joined
/// onto it when the endpoint was asked for one.
#[derive(Debug, Clone)]
pub struct Joined<E, P = Value> {
    pub entity: E,
    pub parent: Option<P>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Element<E, P> {
    Pair((E, Option<P>)),
    Single((E,)),
}

impl<'de, E, P> Deserialize<'de> for Joined<E, P>
where
    E: Deserialize<'de>,
    P: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Element::<E, P>::deserialize(deserializer)? {
            Element::Pair((entity, parent)) => Self { entity, parent },
            Element::Single((entity,)) => Self {
                entity,
                parent: None,
            },
        })
    }
}
