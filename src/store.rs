// src/store.rs

//! Record listing over the host's document index and store.
//!
//! The index and store are collaborator traits implemented by the host
//! (or by `host::DirHost` for standalone use). Listing surfaces index
//! failures as errors; the handler layer decides whether to degrade.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::extract::AttributeExtractor;
use crate::models::{FieldDefaults, MemberRow, NamespaceKind, Record, SortDirection, SortField};

/// Default bound on concurrent document body fetches.
const DEFAULT_CONCURRENCY: usize = 8;

/// Index over collection membership, ordered by a chosen field.
#[async_trait]
pub trait DocumentIndex: Send + Sync {
    /// Query members of a collection, ordered by (field, direction).
    async fn query_members(
        &self,
        collection: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<MemberRow>>;
}

/// Access to raw document bodies.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the raw text of a document.
    async fn body(&self, identifier: &str) -> Result<String>;
}

/// Resolves a collection to typed records.
pub struct RecordStore {
    index: Arc<dyn DocumentIndex>,
    documents: Arc<dyn DocumentStore>,
    extractor: AttributeExtractor,
    concurrency: usize,
}

impl RecordStore {
    pub fn new(
        index: Arc<dyn DocumentIndex>,
        documents: Arc<dyn DocumentStore>,
        extractor: AttributeExtractor,
    ) -> Self {
        Self {
            index,
            documents,
            extractor,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// List the records of a collection in index order.
    ///
    /// Sub-category members are filtered out. Body fetches run
    /// concurrently but results keep the index ordering. A document whose
    /// body cannot be fetched is skipped with a warning; an index failure
    /// is returned to the caller.
    pub async fn list(
        &self,
        collection: &str,
        field: SortField,
        direction: SortDirection,
        defaults: &FieldDefaults,
    ) -> Result<Vec<Record>> {
        let rows = self.index.query_members(collection, field, direction).await?;

        let members: Vec<MemberRow> = rows
            .into_iter()
            .filter(|row| row.namespace != NamespaceKind::Category)
            .collect();

        let mut bodies = stream::iter(members)
            .map(|row| async move {
                let body = self.documents.body(&row.identifier).await;
                (row.identifier, body)
            })
            .buffered(self.concurrency);

        let mut records = Vec::new();
        while let Some((identifier, body)) = bodies.next().await {
            match body {
                Ok(text) => records.push(self.extractor.extract(&identifier, &text, defaults)),
                Err(error) => {
                    log::warn!("Skipping document {}: {}", identifier, error);
                }
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;

    struct FixedIndex {
        rows: Vec<MemberRow>,
        fail: bool,
    }

    #[async_trait]
    impl DocumentIndex for FixedIndex {
        async fn query_members(
            &self,
            collection: &str,
            _field: SortField,
            _direction: SortDirection,
        ) -> Result<Vec<MemberRow>> {
            if self.fail {
                return Err(AppError::index(collection, "backend unavailable"));
            }
            Ok(self.rows.clone())
        }
    }

    struct FixedDocs {
        bodies: HashMap<String, String>,
    }

    #[async_trait]
    impl DocumentStore for FixedDocs {
        async fn body(&self, identifier: &str) -> Result<String> {
            self.bodies
                .get(identifier)
                .cloned()
                .ok_or_else(|| AppError::document(identifier, "not found"))
        }
    }

    fn row(identifier: &str, namespace: NamespaceKind) -> MemberRow {
        MemberRow {
            identifier: identifier.to_string(),
            namespace,
            order_value: identifier.to_string(),
        }
    }

    fn store(rows: Vec<MemberRow>, fail: bool, bodies: &[(&str, &str)]) -> RecordStore {
        let bodies = bodies
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RecordStore::new(
            Arc::new(FixedIndex { rows, fail }),
            Arc::new(FixedDocs { bodies }),
            AttributeExtractor::new("Infobox Project").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_list_extracts_in_index_order() {
        let store = store(
            vec![
                row("B", NamespaceKind::Document),
                row("A", NamespaceKind::Document),
            ],
            false,
            &[
                ("B", "{{Infobox Project\n|name = Second\n}}"),
                ("A", "{{Infobox Project\n|name = First\n}}"),
            ],
        );

        let records = store
            .list(
                "Projects",
                SortField::Alphabetical,
                SortDirection::Descending,
                &FieldDefaults::default(),
            )
            .await
            .unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn test_list_filters_sub_categories() {
        let store = store(
            vec![
                row("Category:Tools", NamespaceKind::Category),
                row("Drill", NamespaceKind::Document),
            ],
            false,
            &[("Drill", "no block")],
        );

        let records = store
            .list(
                "Projects",
                SortField::Alphabetical,
                SortDirection::Ascending,
                &FieldDefaults::default(),
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "Drill");
    }

    #[tokio::test]
    async fn test_list_surfaces_index_failure() {
        let store = store(vec![], true, &[]);
        let result = store
            .list(
                "Projects",
                SortField::Alphabetical,
                SortDirection::Ascending,
                &FieldDefaults::default(),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_skips_unfetchable_documents() {
        let store = store(
            vec![
                row("Good", NamespaceKind::Document),
                row("Gone", NamespaceKind::Document),
            ],
            false,
            &[("Good", "text")],
        );

        let records = store
            .list(
                "Projects",
                SortField::Alphabetical,
                SortDirection::Ascending,
                &FieldDefaults::default(),
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, "Good");
    }
}
