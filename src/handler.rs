// src/handler.rs

//! Host-facing tag handlers.
//!
//! The host's markup expander routes two tags here: the showcase list tag
//! (plain or daily rotation) and the sort picker tag. Handler output is a
//! markup fragment the host expands further; collaborator failures degrade
//! to an empty listing, never to an error shown to the reader.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::KeyValueCache;
use crate::config::Config;
use crate::error::Result;
use crate::extract::AttributeExtractor;
use crate::locale::Locale;
use crate::models::{FieldDefaults, ListKind, SortDirection, SortField};
use crate::render::render_list;
use crate::rotation::DailyRotation;
use crate::sort;
use crate::store::{DocumentIndex, DocumentStore, RecordStore};

/// Query parameter carrying the order token.
pub const ORDER_PARAM: &str = "order";

/// Fallback sort when the request carries no usable order token.
const FALLBACK_ORDER: (SortField, SortDirection) =
    (SortField::CreationOrder, SortDirection::Descending);

/// Entry point wiring the pipeline to a host's collaborators.
pub struct ShowcaseHandler {
    store: RecordStore,
    cache: Arc<dyn KeyValueCache>,
    locale: Locale,
    config: Config,
}

impl ShowcaseHandler {
    /// Build a handler from host collaborators and configuration.
    pub fn new(
        index: Arc<dyn DocumentIndex>,
        documents: Arc<dyn DocumentStore>,
        cache: Arc<dyn KeyValueCache>,
        config: Config,
    ) -> Result<Self> {
        let extractor = AttributeExtractor::new(&config.extract.block_marker)?;
        let locale = Locale::for_language(&config.language);

        Ok(Self {
            store: RecordStore::new(index, documents, extractor),
            cache,
            locale,
            config,
        })
    }

    /// Replace the built-in locale table.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Handle the showcase list tag for a collection.
    ///
    /// Recognized attributes: `type` (`daily` for the rotation), `limit`,
    /// `thumb_size`, `trim_text`, `defaultimg`, `defaultdesc`.
    pub async fn showcase_tag(
        &self,
        collection: &str,
        attrs: &HashMap<String, String>,
        order_token: Option<&str>,
    ) -> String {
        let defaults = FieldDefaults {
            image: attrs
                .get("defaultimg")
                .cloned()
                .unwrap_or_else(|| self.config.extract.default_image.clone()),
            description: attrs
                .get("defaultdesc")
                .cloned()
                .unwrap_or_else(|| self.config.extract.default_description.clone()),
        };

        let (field, direction) = sort::decode(order_token, &SortField::ALL, FALLBACK_ORDER);

        // An index failure degrades to an empty listing; the cause is only
        // logged, never surfaced to the reader.
        let records = match self.store.list(collection, field, direction, &defaults).await {
            Ok(records) => records,
            Err(error) => {
                log::warn!("Listing collection {} failed: {}", collection, error);
                Vec::new()
            }
        };

        let settings = self.config.list.with_attrs(attrs);

        match ListKind::from_attrs(attrs) {
            ListKind::Plain => render_list(&records, &settings),
            ListKind::Daily => {
                let namespace = format!("{}:{}", self.config.rotation.namespace, collection);
                DailyRotation::new(self.cache.as_ref())
                    .render_daily(&records, &settings, &namespace)
                    .await
            }
        }
    }

    /// Handle the sort picker tag.
    ///
    /// The `fields` attribute is a comma-separated subset of the sortable
    /// fields; unknown names are dropped and an empty set yields no output.
    pub fn sortable_tag(
        &self,
        attrs: &HashMap<String, String>,
        order_token: Option<&str>,
    ) -> String {
        let fields: Vec<SortField> = attrs
            .get("fields")
            .map(String::as_str)
            .unwrap_or("")
            .split(',')
            .filter_map(|name| SortField::parse(name.trim()))
            .collect();

        sort::render_control(&fields, order_token, ORDER_PARAM, &self.locale)
    }
}
