//! Case-insensitive grouping of zip records by city name.

use std::collections::HashMap;

use crate::dataset::Zip;

use super::IndexStats;

/// Immutable mapping from lower-cased city name to the records sharing
/// that city.
///
/// Every record of the source dataset lands in exactly one bucket, the
/// one keyed by the lower-cased form of its city field. Grouping is
/// stable: record order within a bucket matches dataset order. An
/// empty city field is a valid, queryable key `""`.
#[derive(Debug, Default)]
pub struct CityIndex {
    buckets: HashMap<String, Vec<Zip>>,
    records: usize,
}

impl CityIndex {
    /// Build the index by consuming the dataset in order.
    ///
    /// Single pass, no failure mode.
    pub fn build(zips: Vec<Zip>) -> Self {
        let records = zips.len();
        let mut buckets: HashMap<String, Vec<Zip>> = HashMap::new();

        for zip in zips {
            let key = zip.city.to_lowercase();
            buckets.entry(key).or_default().push(zip);
        }

        Self { buckets, records }
    }

    /// Look up the records for an already-normalized (lower-cased)
    /// city name. Total: an absent city yields the empty slice, never
    /// an error.
    pub fn get(&self, city: &str) -> &[Zip] {
        self.buckets.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of records indexed
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Number of distinct city buckets
    pub fn city_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records,
            cities: self.buckets.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zips() -> Vec<Zip> {
        vec![
            Zip::new("00210", "Portsmouth", "NH"),
            Zip::new("98101", "Seattle", "WA"),
            Zip::new("00211", "PORTSMOUTH", "NH"),
            Zip::new("23704", "portsmouth", "VA"),
        ]
    }

    #[test]
    fn test_groups_by_lowercased_city() {
        let index = CityIndex::build(sample_zips());

        let portsmouth = index.get("portsmouth");
        assert_eq!(portsmouth.len(), 3);
        assert_eq!(index.get("seattle").len(), 1);
    }

    #[test]
    fn test_case_variants_share_one_bucket() {
        let index = CityIndex::build(sample_zips());
        assert_eq!(index.city_count(), 2);
        // Only the normalized key exists.
        assert!(index.get("Portsmouth").is_empty());
        assert!(index.get("PORTSMOUTH").is_empty());
    }

    #[test]
    fn test_bucket_preserves_dataset_order() {
        let index = CityIndex::build(sample_zips());
        let codes: Vec<&str> = index
            .get("portsmouth")
            .iter()
            .map(|z| z.code.as_str())
            .collect();
        assert_eq!(codes, vec!["00210", "00211", "23704"]);
    }

    #[test]
    fn test_lookup_is_total() {
        let index = CityIndex::build(sample_zips());
        assert!(index.get("nowhere").is_empty());
    }

    #[test]
    fn test_empty_city_is_a_valid_key() {
        let zips = vec![
            Zip::new("00210", "", "NH"),
            Zip::new("98101", "Seattle", "WA"),
        ];
        let index = CityIndex::build(zips);
        assert_eq!(index.get("").len(), 1);
        assert_eq!(index.get("")[0].code, "00210");
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_bucket() {
        let index = CityIndex::build(sample_zips());
        let total: usize = ["portsmouth", "seattle"]
            .iter()
            .map(|c| index.get(c).len())
            .sum();
        assert_eq!(total, index.len());
    }

    #[test]
    fn test_stats() {
        let index = CityIndex::build(sample_zips());
        let stats = index.stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.cities, 2);
    }

    #[test]
    fn test_empty_dataset() {
        let index = CityIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.city_count(), 0);
        assert!(index.get("seattle").is_empty());
    }
}
