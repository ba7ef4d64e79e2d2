// src/rotation.rs

//! Daily rotation: a bounded random pick of records, cached until midnight.
//!
//! The rotation keeps two cache entries per namespace: the identifiers of
//! the most recent picks (so consecutive days rotate through different
//! records) and the fully rendered markup (so a day's selection is stable
//! across requests). The read-check-compute-write sequence is not atomic;
//! concurrent cold requests may both recompute with last-write-wins.

use chrono::{DateTime, Local, TimeZone};
use rand::Rng;

use crate::cache::KeyValueCache;
use crate::models::{ListSettings, Record};
use crate::render::render_list;

/// How long picked identifiers stay excluded from the pool.
pub const RECENT_TTL_SECS: u64 = 48 * 3600;

/// Rotation selection and caching over a cache backend.
pub struct DailyRotation<'a> {
    cache: &'a dyn KeyValueCache,
}

impl<'a> DailyRotation<'a> {
    pub fn new(cache: &'a dyn KeyValueCache) -> Self {
        Self { cache }
    }

    /// Return today's rotation markup, recomputing when the cached
    /// rendering has expired.
    ///
    /// Empty results are rendered and cached too, so an empty collection
    /// does not recompute on every request.
    pub async fn render_daily(
        &self,
        candidates: &[Record],
        settings: &ListSettings,
        namespace: &str,
    ) -> String {
        let rendered_key = format!("{namespace}:rendered");
        let recent_key = format!("{namespace}:recent");

        match self.cache.get(&rendered_key).await {
            Ok(Some(cached)) => return cached,
            Ok(None) => {}
            Err(e) => log::warn!("Rotation cache read failed, recomputing: {}", e),
        }

        let recent = self.load_recent(&recent_key).await;
        let picks = pick(candidates, &recent, settings.limit, &mut rand::thread_rng());

        // The new picks replace the previous window outright; an identifier
        // excluded today can reappear tomorrow.
        let pick_ids: Vec<&str> = picks.iter().map(|r| r.identifier.as_str()).collect();
        match serde_json::to_string(&pick_ids) {
            Ok(json) => {
                if let Err(e) = self.cache.set(&recent_key, &json, RECENT_TTL_SECS).await {
                    log::warn!("Failed to store recent picks: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to encode recent picks: {}", e),
        }

        let output = render_list(&picks, settings);
        let ttl = seconds_until_midnight(Local::now());
        if let Err(e) = self.cache.set(&rendered_key, &output, ttl).await {
            log::warn!("Failed to store rendered rotation: {}", e);
        }

        output
    }

    async fn load_recent(&self, key: &str) -> Vec<String> {
        match self.cache.get(key).await {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Discarding malformed recent-picks entry: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Recent-picks read failed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Pick up to `limit` records uniformly at random, without replacement.
///
/// Only visible records outside the recently-shown set enter the pool.
/// Picked records without an image are discarded: they count toward
/// neither the limit nor the next recently-shown window. The pool shrinks
/// on every draw, so the loop terminates even when nothing is eligible.
pub fn pick<R: Rng>(
    candidates: &[Record],
    recent: &[String],
    limit: usize,
    rng: &mut R,
) -> Vec<Record> {
    let mut pool: Vec<&Record> = candidates
        .iter()
        .filter(|r| r.visible && !recent.iter().any(|id| id == &r.identifier))
        .collect();

    let mut picks = Vec::new();
    while picks.len() < limit && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        let record = pool.swap_remove(index);
        if !record.has_image() {
            continue;
        }
        picks.push(record.clone());
    }

    picks
}

/// Seconds from `now` until the next local midnight.
pub fn seconds_until_midnight<Tz: TimeZone>(now: DateTime<Tz>) -> u64 {
    let next = now
        .date_naive()
        .succ_opt()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|midnight| now.timezone().from_local_datetime(&midnight).earliest());

    match next {
        Some(midnight) => (midnight - now).num_seconds().max(1) as u64,
        None => 86_400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::models::FieldDefaults;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(identifier: &str, image: &str, visible: bool) -> Record {
        let mut record = Record::defaulted(identifier, &FieldDefaults::default());
        record.image_ref = image.to_string();
        record.visible = visible;
        record
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_pick_respects_limit() {
        let candidates: Vec<Record> = (0..10)
            .map(|i| record(&format!("P{i}"), "img.jpg", true))
            .collect();
        let picks = pick(&candidates, &[], 4, &mut rng());
        assert_eq!(picks.len(), 4);
    }

    #[test]
    fn test_pick_never_returns_imageless() {
        let candidates = vec![
            record("A", "", true),
            record("B", "B.jpg", true),
            record("C", "", true),
        ];
        let picks = pick(&candidates, &[], 4, &mut rng());
        assert!(picks.iter().all(|r| r.has_image()));
        assert_eq!(picks.len(), 1);
    }

    #[test]
    fn test_pick_excludes_invisible_and_recent() {
        let candidates = vec![
            record("Hidden", "H.jpg", false),
            record("Recent", "R.jpg", true),
            record("Fresh", "F.jpg", true),
        ];
        let recent = vec!["Recent".to_string()];
        let picks = pick(&candidates, &recent, 4, &mut rng());
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].identifier, "Fresh");
    }

    #[test]
    fn test_pick_empty_pool() {
        assert!(pick(&[], &[], 4, &mut rng()).is_empty());
    }

    #[test]
    fn test_pick_without_replacement() {
        let candidates: Vec<Record> = (0..5)
            .map(|i| record(&format!("P{i}"), "img.jpg", true))
            .collect();
        let picks = pick(&candidates, &[], 5, &mut rng());
        let mut ids: Vec<&str> = picks.iter().map(|r| r.identifier.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_render_daily_cache_hit_is_byte_identical() {
        let cache = MemoryCache::new();
        let rotation = DailyRotation::new(&cache);
        let candidates: Vec<Record> = (0..8)
            .map(|i| record(&format!("P{i}"), "img.jpg", true))
            .collect();
        let settings = ListSettings::default();

        let first = rotation.render_daily(&candidates, &settings, "grid").await;
        let second = rotation.render_daily(&candidates, &settings, "grid").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_render_daily_overwrites_recent_window() {
        let cache = MemoryCache::new();
        let rotation = DailyRotation::new(&cache);
        let candidates = vec![record("Only", "O.jpg", true)];
        let settings = ListSettings::default();

        rotation.render_daily(&candidates, &settings, "ns").await;

        let recent = cache.get("ns:recent").await.unwrap().unwrap();
        let ids: Vec<String> = serde_json::from_str(&recent).unwrap();
        assert_eq!(ids, vec!["Only".to_string()]);
    }

    #[tokio::test]
    async fn test_render_daily_empty_candidates_cached() {
        let cache = MemoryCache::new();
        let rotation = DailyRotation::new(&cache);
        let settings = ListSettings::default();

        let output = rotation.render_daily(&[], &settings, "empty").await;
        assert!(output.contains("showcase-list"));

        // The empty result must be cached to avoid stampede recomputes.
        assert!(cache.get("empty:rendered").await.unwrap().is_some());
    }

    #[test]
    fn test_seconds_until_midnight() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 23, 59, 50).unwrap();
        assert_eq!(seconds_until_midnight(now), 10);

        let start_of_day = Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap();
        assert_eq!(seconds_until_midnight(start_of_day), 86_400);
    }
}
