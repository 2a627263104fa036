use serde::{Deserialize, Serialize};

/// A metadata field defined on a category or case definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryField {
    /// Numeric field key, unique within the configuration
    pub field_no: i64,
    /// Display caption shown in clients
    pub caption: String,
    /// Data type number (negative values reference keyword dictionaries)
    pub type_no: i64,
    /// Resolved data type name
    pub type_name: String,
    /// Maximum value length (0 = unbounded)
    pub length: i64,
    /// Index mode used for retrieval
    pub index_type: i64,
    /// True if the field must be filled before a document is saved
    pub is_mandatory: bool,
    /// String identifier from the export (may be empty)
    pub id: String,
}

impl CategoryField {
    /// Stable identifier for change records: the string id when present,
    /// otherwise the numeric key.
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.field_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A document category with its metadata field definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Numeric category key
    pub category_no: i64,
    pub name: String,
    /// Display title (may differ from the internal name)
    pub title: String,
    pub description: String,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// Full-text indexing mode
    pub fulltext_mode: i64,
    /// Check-in mode for new documents
    pub checkin_mode: i64,
    /// Behavior when a document is saved without content
    pub empty_doc_mode: i64,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Field definitions, in export order
    pub fields: Vec<CategoryField>,
}

impl Category {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.category_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A case definition: a category-like container for case files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseDefinition {
    /// Numeric case definition key
    pub case_def_no: i64,
    pub name: String,
    /// Display title (may differ from the internal name)
    pub title: String,
    pub description: String,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// Check-in mode for new documents
    pub checkin_mode: i64,
    /// Auto-append mode for incoming documents
    pub auto_append_mode: i64,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Case header field definitions, in export order
    pub fields: Vec<CategoryField>,
}

impl CaseDefinition {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.case_def_no.to_string()
        } else {
            self.id.clone()
        }
    }

    /// Name shown in change records: the title, falling back to the
    /// internal name when no title is set.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}
