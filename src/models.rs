//! Frontend Models
//!
//! Data structures matching backend entities, plus the edit form view model.

use reactive_stores::Store;
use serde::{Deserialize, Deserializer, Serialize};

/// Item record as returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Missing or `null` fields decode as empty so the rest still pre-fill
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    /// Backend may send a JSON number or a string
    #[serde(default, deserialize_with = "number_string_or_null")]
    pub price: String,
}

/// `GET /item/{id}` wraps the record: `{ "item": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope {
    pub item: Item,
}

/// Edit form view model. Also the exact `PUT` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Store)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    /// Number-as-string, sent as typed
    pub price: String,
}

impl From<Item> for ItemForm {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}

/// Identifiers and credentials needed to address one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTarget {
    pub user_id: String,
    pub item_id: String,
    pub token: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Text(String),
    Number(serde_json::Number),
}

impl From<NumberOrString> for String {
    fn from(raw: NumberOrString) -> Self {
        match raw {
            NumberOrString::Text(text) => text,
            NumberOrString::Number(number) => number.to_string(),
        }
    }
}

/// Renders numbers without a trailing `.0` for whole values.
pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer).map(String::from)
}

/// Like `number_or_string`, with `null` as `""`
fn number_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_numeric_price() {
        let json = r#"{"item":{"id":7,"name":"Lamp","description":"Desk lamp","price":49.9}}"#;
        let envelope: ItemEnvelope = serde_json::from_str(json).unwrap();
        let form = ItemForm::from(envelope.item);
        assert_eq!(form.name, "Lamp");
        assert_eq!(form.description, "Desk lamp");
        assert_eq!(form.price, "49.9");
    }

    #[test]
    fn test_envelope_with_string_price() {
        let json = r#"{"item":{"name":"Lamp","description":"Desk lamp","price":"12"}}"#;
        let envelope: ItemEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.item.price, "12");
        assert_eq!(envelope.item.id, None);
    }

    #[test]
    fn test_integer_price_has_no_fraction() {
        let json = r#"{"item":{"name":"Mug","price":15}}"#;
        let envelope: ItemEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.item.price, "15");
        assert_eq!(envelope.item.description, "");
    }

    #[test]
    fn test_missing_name_keeps_other_fields() {
        let json = r#"{"item":{"description":"Desk","price":5}}"#;
        let form = ItemForm::from(serde_json::from_str::<ItemEnvelope>(json).unwrap().item);
        assert_eq!(form.name, "");
        assert_eq!(form.description, "Desk");
        assert_eq!(form.price, "5");
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{"item":{"name":"Lamp","description":null,"price":null}}"#;
        let form = ItemForm::from(serde_json::from_str::<ItemEnvelope>(json).unwrap().item);
        assert_eq!(form.name, "Lamp");
        assert_eq!(form.description, "");
        assert_eq!(form.price, "");
    }

    #[test]
    fn test_form_serializes_as_entered() {
        let form = ItemForm {
            name: "Mug".to_string(),
            description: "Blue".to_string(),
            price: "15.50".to_string(),
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Mug", "description": "Blue", "price": "15.50"})
        );
    }
}
