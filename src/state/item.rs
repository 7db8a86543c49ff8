use serde::{Deserialize, Serialize};

use crate::pipeline::FormFields;
use crate::state::store::Identified;

/// A single board entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub message: String,
}

impl Item {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Bind an item from submitted form fields. Missing fields bind as empty
    /// strings and are rejected later by validation.
    pub fn from_form(form: &FormFields) -> Self {
        Self::new(form.value("id"), form.value("message"))
    }
}

impl Identified for Item {
    fn id(&self) -> &str {
        &self.id
    }
}
