use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ValidationError;
use crate::state::item::Item;

lazy_static! {
    static ref ALPHANUMERIC: Regex = Regex::new("^[a-zA-Z0-9]+$").unwrap();
}

/// Field-level checks run before a record reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        required("id", &self.id)?;
        alphanumeric("id", &self.id)?;
        required("message", &self.message)?;
        Ok(())
    }
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError {
            field,
            rule: "required",
        });
    }
    Ok(())
}

fn alphanumeric(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !ALPHANUMERIC.is_match(value) {
        return Err(ValidationError {
            field,
            rule: "alphanum",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item_passes() {
        assert!(Item::new("abc123", "hello world").validate().is_ok());
    }

    #[test]
    fn test_empty_id_is_required() {
        let err = Item::new("", "x").validate().unwrap_err();
        assert_eq!(err.field, "id");
        assert_eq!(err.rule, "required");
    }

    #[test]
    fn test_non_alphanumeric_id_is_rejected() {
        for id in ["!!", "a b", "a-b", "é"] {
            let err = Item::new(id, "x").validate().unwrap_err();
            assert_eq!(err.rule, "alphanum", "id {:?}", id);
        }
    }

    #[test]
    fn test_empty_message_is_required() {
        let err = Item::new("1", "").validate().unwrap_err();
        assert_eq!(err.field, "message");
        assert_eq!(err.rule, "required");
        assert!(err.to_string().contains("message"));
    }
}
