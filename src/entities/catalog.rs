//! Catalog lookup tables - categories, colors and sizes

use serde::{Deserialize, Serialize};

use crate::core::entity::{cell, Entity, RecordId};

/// Product category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for Category {
    const NAME: &'static str = "category";
    const NAME_PLURAL: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME"];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), cell(self.name.as_deref())]
    }
}

/// Product color; `value` is the display swatch (e.g. "#ff0000")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Entity for Color {
    const NAME: &'static str = "color";
    const NAME_PLURAL: &'static str = "colors";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "VALUE"];

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
            cell(self.value.as_deref()),
        ]
    }
}

/// Product size (e.g. "M", "XL")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: RecordId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Entity for Size {
    const NAME: &'static str = "size";
    const NAME_PLURAL: &'static str = "sizes";
    const COLUMNS: &'static [&'static str] = &["ID", "NAME", "VALUE"];

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
            cell(self.value.as_deref()),
        ]
    }
}
