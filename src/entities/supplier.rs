//! Supplier entity type - vendors that purchase orders are placed with

use serde::{Deserialize, Serialize};

use crate::core::entity::{cell, Entity, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Entity for Supplier {
    const NAME: &'static str = "supplier";
    const NAME_PLURAL: &'static str = "suppliers";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "PHONE", "EMAIL", "ADDRESS"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.name.as_deref()),
            cell(self.phone_number.as_deref()),
            cell(self.email.as_deref()),
            cell(self.address.as_deref()),
        ]
    }
}
