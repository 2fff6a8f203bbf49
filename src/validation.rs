//! Form Validation
//!
//! Presence checks for the item form. Every field is checked so the user
//! sees all problems at once.

use std::collections::BTreeMap;

use crate::models::ItemForm;

pub const NAME_REQUIRED: &str = "Name required";
pub const DESCRIPTION_REQUIRED: &str = "description required";
pub const PRICE_REQUIRED: &str = "price required";

/// Field name -> message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.is_empty() {
        errors.insert(field, message);
    }
}

pub fn validate_item_form(form: &ItemForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    require(&mut errors, "name", &form.name, NAME_REQUIRED);
    require(&mut errors, "description", &form.description, DESCRIPTION_REQUIRED);
    require(&mut errors, "price", &form.price, PRICE_REQUIRED);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, description: &str, price: &str) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(validate_item_form(&form("Lamp", "Desk lamp", "10")).is_ok());
    }

    #[test]
    fn test_reports_every_empty_field() {
        let errors = validate_item_form(&form("", "", "")).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("description"), Some(DESCRIPTION_REQUIRED));
        assert_eq!(errors.get("price"), Some(PRICE_REQUIRED));
    }

    #[test]
    fn test_single_missing_field() {
        let errors = validate_item_form(&form("Lamp", "Desk lamp", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("price"), Some(PRICE_REQUIRED));
        assert_eq!(errors.get("name"), None);
    }
}
