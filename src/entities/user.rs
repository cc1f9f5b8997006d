//! User entity - staff accounts that sign in to the dashboard

use serde::{Deserialize, Serialize};

use crate::core::entity::{cell, Entity, RecordId, Scalar};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Account status as reported by the server (active/locked)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Scalar>,
}

impl Entity for User {
    const NAME: &'static str = "user";
    const NAME_PLURAL: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "PHONE", "STATUS"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.full_name.clone().unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            cell(self.full_name.as_deref()),
            cell(self.phone_number.as_deref()),
            cell(self.status.as_ref()),
        ]
    }
}
