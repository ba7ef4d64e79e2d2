//! Collection query types: sort fields, directions and index rows.

use serde::{Deserialize, Serialize};

/// Sortable fields understood by the index collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Time of the last modification to the document
    LastModified,
    /// Order in which documents were created
    CreationOrder,
    /// Alphabetical sort key of the document
    Alphabetical,
}

impl SortField {
    /// All allow-listed fields, in display order.
    pub const ALL: [SortField; 3] = [
        SortField::LastModified,
        SortField::CreationOrder,
        SortField::Alphabetical,
    ];

    /// Stable token used in order parameters and locale keys.
    pub fn key(&self) -> &'static str {
        match self {
            SortField::LastModified => "last_modified",
            SortField::CreationOrder => "creation_order",
            SortField::Alphabetical => "alphabetical",
        }
    }

    /// Parse a field token, returning None for unknown names.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "last_modified" => Some(SortField::LastModified),
            "creation_order" => Some(SortField::CreationOrder),
            "alphabetical" => Some(SortField::Alphabetical),
            _ => None,
        }
    }
}

/// Sort direction for a collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A fully resolved query against the document index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    pub collection: String,
    pub field: SortField,
    pub direction: SortDirection,
}

/// Namespace classification of an index member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespaceKind {
    /// A regular document
    Document,
    /// A sub-category node, filtered out of listings
    Category,
}

/// One row returned by the index for a collection membership query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRow {
    /// Document identifier
    pub identifier: String,

    /// Namespace classification
    pub namespace: NamespaceKind,

    /// Value of the order column, already applied by the index
    pub order_value: String,
}
