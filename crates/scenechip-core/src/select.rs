//! Best-scene selection over candidate catalog items.

use chrono::NaiveDate;

use crate::error::{Result, SceneChipError};
use crate::models::{BoundingBox, SceneItem};

/// One candidate row built from a catalog item, in input order.
#[derive(Debug, Clone)]
struct SceneRecord<'a> {
    acquired: NaiveDate,
    platform: String,
    bbox: BoundingBox,
    item: &'a SceneItem,
}

impl SceneRecord<'_> {
    fn is_sentinel(&self) -> bool {
        self.platform.to_lowercase().contains("sentinel")
    }
}

/// The selected scene: the item itself plus the platform and acquisition
/// date the selection was based on.
#[derive(Debug, Clone)]
pub struct BestScene<'a> {
    pub item: &'a SceneItem,
    pub platform: String,
    /// Acquisition date as `"YYYY-MM-DD"`.
    pub date: String,
}

/// Select the best scene for a sample's date and location.
///
/// If any Sentinel-2 imagery covers the point, the closest Sentinel-2
/// scene by time wins; otherwise the closest Landsat scene. Returns
/// `Ok(None)` when no candidate's bounding box contains the point.
///
/// The time ranking uses the signed difference `sample_date - acquired`
/// sorted ascending, so a scene acquired after the sample outranks any
/// scene acquired before it. Ties keep input order.
pub fn select_best_scene<'a>(
    items: &'a [SceneItem],
    sample_date: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Result<Option<BestScene<'a>>> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let acquired = item.acquired_on()?;
        let platform = item
            .platform()
            .ok_or_else(|| SceneChipError::MissingField {
                item_id: item.id.clone(),
                field: "platform".to_string(),
            })?
            .to_string();
        let bbox = item
            .bounding_box()
            .ok_or_else(|| SceneChipError::MissingField {
                item_id: item.id.clone(),
                field: "bbox".to_string(),
            })?;
        records.push(SceneRecord { acquired, platform, bbox, item });
    }

    records.retain(|r| r.bbox.contains_strict(longitude, latitude));
    if records.is_empty() {
        tracing::debug!(%sample_date, latitude, longitude, "no candidate scene contains the sample point");
        return Ok(None);
    }

    if records.iter().any(SceneRecord::is_sentinel) {
        records.retain(SceneRecord::is_sentinel);
    }

    // Vec::sort_by_key is stable, so ties resolve to input order.
    records.sort_by_key(|r| sample_date.signed_duration_since(r.acquired));

    let best = &records[0];
    tracing::debug!(
        item_id = %best.item.id,
        platform = %best.platform,
        acquired = %best.acquired,
        "selected best scene"
    );

    Ok(Some(BestScene {
        item: best.item,
        platform: best.platform.clone(),
        date: best.acquired.format("%Y-%m-%d").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SceneItem, SceneProperties};
    use std::collections::HashMap;

    fn item(id: &str, date: &str, platform: &str, bbox: [f64; 4]) -> SceneItem {
        SceneItem {
            id: id.to_string(),
            bbox: bbox.to_vec(),
            properties: SceneProperties {
                datetime: Some(date.to_string()),
                platform: Some(platform.to_string()),
                eo_cloud_cover: None,
                extra: HashMap::new(),
            },
            assets: HashMap::new(),
            collection: None,
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 6, 15).unwrap()
    }

    // Covers the sample point at (lon 115.0, lat -8.5)
    const COVERING: [f64; 4] = [114.0, -9.0, 116.0, -8.0];
    const ELSEWHERE: [f64; 4] = [10.0, 40.0, 12.0, 42.0];

    #[test]
    fn test_empty_candidate_list() {
        let best = select_best_scene(&[], sample_date(), -8.5, 115.0).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_no_candidate_contains_the_point() {
        let items = vec![
            item("a", "2021-06-10", "landsat-8", ELSEWHERE),
            item("b", "2021-06-12", "Sentinel-2A", ELSEWHERE),
        ];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_single_containing_item_wins_regardless_of_platform() {
        let items = vec![item("a", "2021-06-01", "landsat-8", COVERING)];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0)
            .unwrap()
            .expect("one candidate covers the point");

        assert_eq!(best.item.id, "a");
        assert_eq!(best.platform, "landsat-8");
        assert_eq!(best.date, "2021-06-01");
    }

    #[test]
    fn test_sentinel_preferred_over_temporally_closer_landsat() {
        let items = vec![
            item("landsat", "2021-06-14", "landsat-8", COVERING),
            item("sentinel", "2021-06-01", "Sentinel-2B", COVERING),
        ];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0)
            .unwrap()
            .unwrap();

        assert_eq!(best.item.id, "sentinel");
        assert_eq!(best.date, "2021-06-01");
    }

    #[test]
    fn test_closest_sentinel_wins_among_sentinels() {
        let items = vec![
            item("far", "2021-06-01", "Sentinel-2A", COVERING),
            item("near", "2021-06-13", "Sentinel-2B", COVERING),
        ];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0)
            .unwrap()
            .unwrap();

        assert_eq!(best.item.id, "near");
    }

    #[test]
    fn test_point_on_bbox_edge_is_excluded() {
        // Sample latitude exactly on the southern edge.
        let items = vec![item("edge", "2021-06-10", "landsat-8", [114.0, -8.5, 116.0, -8.0])];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0).unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_signed_difference_prefers_scenes_after_the_sample() {
        // The ranking is the signed difference sample - acquired sorted
        // ascending, so a scene from the day after the sample (diff -1)
        // outranks one from the day before (diff +1).
        let items = vec![
            item("before", "2021-06-14", "landsat-8", COVERING),
            item("after", "2021-06-16", "landsat-9", COVERING),
        ];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0)
            .unwrap()
            .unwrap();

        assert_eq!(best.item.id, "after");
    }

    #[test]
    fn test_time_ties_resolve_to_input_order() {
        let items = vec![
            item("first", "2021-06-10", "Sentinel-2A", COVERING),
            item("second", "2021-06-10", "Sentinel-2B", COVERING),
        ];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0)
            .unwrap()
            .unwrap();

        assert_eq!(best.item.id, "first");
    }

    #[test]
    fn test_platform_match_is_case_insensitive() {
        let items = vec![
            item("landsat", "2021-06-14", "landsat-8", COVERING),
            item("sentinel", "2021-06-01", "SENTINEL-2A", COVERING),
        ];
        let best = select_best_scene(&items, sample_date(), -8.5, 115.0)
            .unwrap()
            .unwrap();

        assert_eq!(best.item.id, "sentinel");
    }

    #[test]
    fn test_missing_platform_is_an_error() {
        let mut bad = item("bad", "2021-06-10", "landsat-8", COVERING);
        bad.properties.platform = None;
        let items = vec![bad];

        let err = select_best_scene(&items, sample_date(), -8.5, 115.0).unwrap_err();
        assert!(matches!(err, SceneChipError::MissingField { ref field, .. } if field == "platform"));
    }

    #[test]
    fn test_unparseable_datetime_is_an_error() {
        let items = vec![item("bad", "June 10th", "landsat-8", COVERING)];

        let err = select_best_scene(&items, sample_date(), -8.5, 115.0).unwrap_err();
        assert!(matches!(err, SceneChipError::DateParse(_)));
    }
}
