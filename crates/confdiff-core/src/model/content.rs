//! Content-side configuration objects: folders, forms, queries,
//! dictionaries, tree views, counters, data types, stamps, and
//! retention policies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A folder in the folder hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    /// Numeric folder key
    pub folder_no: i64,
    pub name: String,
    /// Parent folder (None for top-level folders)
    pub parent_no: Option<i64>,
    /// Folder type number
    pub folder_type: i64,
    /// Resolved folder type name
    pub folder_type_name: String,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Child folders, in export order
    pub children: Vec<Folder>,
}

impl Folder {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.folder_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A component within an eForm definition. Components nest arbitrarily
/// (panels, columns, field groups).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EFormComponent {
    /// Component key within the form definition
    pub key: String,
    /// Display label
    pub label: String,
    /// Nested child components
    pub children: Vec<EFormComponent>,
}

/// An electronic form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EForm {
    /// Numeric form key
    pub form_no: i64,
    pub name: String,
    /// Form definition version
    pub version: i64,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Top-level components of the parsed definition
    pub components: Vec<EFormComponent>,
}

impl EForm {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.form_no.to_string()
        } else {
            self.id.clone()
        }
    }

    /// Total number of components in the definition, counting every
    /// nesting level.
    pub fn component_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&EFormComponent> = self.components.iter().collect();
        while let Some(component) = stack.pop() {
            count += 1;
            stack.extend(component.children.iter());
        }
        count
    }
}

/// A saved search/query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Numeric query key
    pub query_no: i64,
    pub name: String,
    pub description: String,
    /// Category the query searches, if bound to one
    pub category_no: Option<i64>,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// String identifier from the export (may be empty)
    pub id: String,
}

impl Query {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.query_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A keyword in a dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub keyword_no: i64,
    pub value: String,
    /// Parent keyword for hierarchical dictionaries
    pub parent_no: Option<i64>,
    pub id: String,
}

/// A keyword dictionary (lookup list).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordDictionary {
    /// Numeric dictionary key
    pub dictionary_no: i64,
    pub name: String,
    pub description: String,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Keywords, in export order
    pub keywords: Vec<Keyword>,
}

impl KeywordDictionary {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.dictionary_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// One level of a tree view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeViewLevel {
    pub level_no: i64,
    pub field_no: i64,
    pub field_name: String,
}

/// A tree view over a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeView {
    /// Numeric tree view key
    pub treeview_no: i64,
    pub name: String,
    /// Category the view is built over, if bound to one
    pub category_no: Option<i64>,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Grouping levels, outermost first
    pub levels: Vec<TreeViewLevel>,
}

impl TreeView {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.treeview_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// An automatic counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counter {
    /// Numeric counter key
    pub counter_no: i64,
    pub name: String,
    /// Counter type number
    pub counter_type: i64,
    /// Resolved counter type name
    pub counter_type_name: String,
    /// Number format string (e.g. `INV-{0:D6}`)
    pub format_string: String,
    /// Current counter value at export time
    pub current_value: i64,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// String identifier from the export (may be empty)
    pub id: String,
}

impl Counter {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.counter_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A column in a user-defined data type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataTypeColumn {
    pub col_no: i64,
    pub col_name: String,
}

/// A custom data type backed by a lookup table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataType {
    /// Numeric data type key
    pub datatype_no: i64,
    pub name: String,
    /// Type group number
    pub type_group: i64,
    /// Backing table name
    pub table_name: String,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Columns, in export order
    pub columns: Vec<DataTypeColumn>,
}

impl DataType {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.datatype_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A stamp definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stamp {
    /// Numeric stamp key
    pub stamp_no: i64,
    pub name: String,
    /// Stamp type number
    pub stamp_type: i64,
    /// Resolved stamp type name
    pub stamp_type_name: String,
    /// Image file name for picture stamps
    pub filename: String,
    /// Containing folder, if filed anywhere
    pub folder_no: Option<i64>,
    /// String identifier from the export (may be empty)
    pub id: String,
}

impl Stamp {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.stamp_no.to_string()
        } else {
            self.id.clone()
        }
    }
}

/// A category assignment on a retention policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicyCategory {
    pub category_no: i64,
    /// Sub-category keyword number (0 = whole category)
    pub sub_category_no: i64,
    pub category_name: String,
    /// True if this assignment exempts the category from retention
    pub no_retention: bool,
}

/// A retention policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    /// Numeric policy key
    pub policy_no: i64,
    pub name: String,
    /// Retention period in months
    pub months: i64,
    /// True if documents are purged when the period expires
    pub purge: bool,
    /// True if files are also deleted from disk
    pub delete_disk: bool,
    /// Field or macro the retention period starts from
    pub starting: String,
    /// String identifier from the export (may be empty)
    pub id: String,
    /// Category assignments
    pub categories: Vec<RetentionPolicyCategory>,
}

impl RetentionPolicy {
    pub fn object_id(&self) -> String {
        if self.id.is_empty() {
            self.policy_no.to_string()
        } else {
            self.id.clone()
        }
    }

    /// Number of distinct categories this policy is assigned to.
    /// Sub-category assignments collapse into their category.
    pub fn distinct_category_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.category_no)
            .collect::<BTreeSet<i64>>()
            .len()
    }
}
