//! Site to region lookup.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::warn;
use trailer_model::RegionMapping;

/// Resolves a site code to its origin region.
///
/// Built from the region-mapping table in row order; the first region seen
/// for an origin is authoritative and later rows for the same origin are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    regions: BTreeMap<String, String>,
    duplicates: usize,
    conflicts: usize,
}

impl RegionLookup {
    pub fn from_mappings(mappings: &[RegionMapping]) -> Self {
        let mut lookup = Self::default();
        for mapping in mappings {
            match lookup.regions.entry(mapping.origin.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(mapping.origin_region.clone());
                }
                Entry::Occupied(kept) => {
                    lookup.duplicates += 1;
                    if kept.get() != &mapping.origin_region {
                        lookup.conflicts += 1;
                        warn!(
                            origin = %mapping.origin,
                            kept = %kept.get(),
                            ignored = %mapping.origin_region,
                            "conflicting region mapping; keeping first"
                        );
                    }
                }
            }
        }
        lookup
    }

    /// Region for `site`, or `None` if the site is unmapped.
    pub fn region_for(&self, site: &str) -> Option<&str> {
        self.regions.get(site).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of mapping rows ignored because their origin was already mapped.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Number of ignored rows that disagreed with the kept region.
    pub fn conflict_count(&self) -> usize {
        self.conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_mapping_wins() {
        let lookup = RegionLookup::from_mappings(&[
            RegionMapping::new("ABCD", "West"),
            RegionMapping::new("ABCD", "East"),
            RegionMapping::new("ABCD", "West"),
            RegionMapping::new("EFGH", "North"),
        ]);

        assert_eq!(lookup.region_for("ABCD"), Some("West"));
        assert_eq!(lookup.region_for("EFGH"), Some("North"));
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.duplicate_count(), 2);
        assert_eq!(lookup.conflict_count(), 1);
    }

    #[test]
    fn unknown_site_has_no_region() {
        let lookup = RegionLookup::from_mappings(&[RegionMapping::new("ABCD", "West")]);
        assert_eq!(lookup.region_for("ZZZZ"), None);
        assert_eq!(lookup.region_for(""), None);
    }
}
