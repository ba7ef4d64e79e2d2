// src/host/dir.rs

//! Directory-backed document index and store.
//!
//! Documents are `.txt` files under a root directory; the file stem is the
//! document identifier. Collection membership is declared by a
//! `[[Category:Name]]` line anywhere in the file. Files whose stem starts
//! with `Category:` are sub-category nodes.

use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{MemberRow, NamespaceKind, SortDirection, SortField};
use crate::store::{DocumentIndex, DocumentStore};

const DOCUMENT_EXTENSION: &str = "txt";

/// Filesystem host backend.
#[derive(Clone)]
pub struct DirHost {
    root: PathBuf,
}

impl DirHost {
    /// Create a host rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, identifier: &str) -> PathBuf {
        self.root
            .join(format!("{identifier}.{DOCUMENT_EXTENSION}"))
    }

    /// Compute the order column value for one document.
    ///
    /// Timestamps are zero-padded so lexicographic order matches numeric
    /// order. Creation time falls back to mtime on filesystems without it.
    fn order_value(
        identifier: &str,
        metadata: &std::fs::Metadata,
        field: SortField,
    ) -> String {
        let epoch_secs = |time: std::io::Result<std::time::SystemTime>| {
            time.ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_secs())
                .unwrap_or(0)
        };

        match field {
            SortField::LastModified => format!("{:020}", epoch_secs(metadata.modified())),
            SortField::CreationOrder => {
                let created = metadata.created().or_else(|_| metadata.modified());
                format!("{:020}", epoch_secs(created))
            }
            SortField::Alphabetical => identifier.to_lowercase(),
        }
    }
}

#[async_trait]
impl DocumentIndex for DirHost {
    async fn query_members(
        &self,
        collection: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<MemberRow>> {
        let membership_line = format!("[[Category:{collection}]]");
        let mut rows = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            let Some(identifier) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(error) => {
                    log::warn!("Skipping unreadable document {:?}: {}", path, error);
                    continue;
                }
            };
            if !content.contains(&membership_line) {
                continue;
            }

            let metadata = entry.metadata().await?;
            let namespace = if identifier.starts_with("Category:") {
                NamespaceKind::Category
            } else {
                NamespaceKind::Document
            };

            rows.push(MemberRow {
                identifier: identifier.to_string(),
                namespace,
                order_value: Self::order_value(identifier, &metadata, field),
            });
        }

        rows.sort_by(|a, b| {
            let ordering = a
                .order_value
                .cmp(&b.order_value)
                .then_with(|| a.identifier.cmp(&b.identifier));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        Ok(rows)
    }
}

#[async_trait]
impl DocumentStore for DirHost {
    async fn body(&self, identifier: &str) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.document_path(identifier)).await?)
    }
}
