use std::collections::BTreeMap;

use lotofacil_data::error::{LotoError, Result};
use lotofacil_data::models::{RangeBucket, RankedEntry};

pub const DEFAULT_BUCKET_WIDTH: u32 = 5;

/// Regroupe les fréquences par tranches de `width` numéros : 1-5, 6-10, ...
///
/// Tranches triées par total décroissant, puis par borne inférieure.
pub fn aggregate(entries: &[RankedEntry], width: u32) -> Result<Vec<RangeBucket>> {
    if width == 0 {
        return Err(LotoError::invalid("largeur de tranche nulle"));
    }

    // clé : borne supérieure de la tranche
    let mut totals: BTreeMap<u32, u64> = BTreeMap::new();
    for entry in entries {
        let value: u32 = entry.number.trim().parse().map_err(|_| {
            LotoError::invalid(format!("numéro non numérique : '{}'", entry.number))
        })?;
        if value == 0 {
            return Err(LotoError::invalid(format!(
                "numéro nul hors de toute tranche : '{}'",
                entry.number
            )));
        }
        let upper = value.div_ceil(width).checked_mul(width).ok_or_else(|| {
            LotoError::invalid(format!("numéro trop grand pour une tranche : '{}'", entry.number))
        })?;
        *totals.entry(upper).or_insert(0) += entry.count as u64;
    }

    let mut buckets: Vec<RangeBucket> = totals
        .into_iter()
        .map(|(upper, total)| RangeBucket {
            lower: upper - (width - 1),
            upper,
            total,
        })
        .collect();
    buckets.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.lower.cmp(&b.lower)));
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(data: &[(&str, u32)]) -> Vec<RankedEntry> {
        data.iter().map(|&(n, c)| RankedEntry::new(n, c)).collect()
    }

    #[test]
    fn test_bucket_bounds() {
        let buckets = aggregate(&entries(&[("01", 1), ("05", 1), ("06", 1), ("25", 1)]), 5).unwrap();
        let bounds: Vec<(u32, u32)> = buckets.iter().map(|b| (b.lower, b.upper)).collect();
        assert!(bounds.contains(&(1, 5)));
        assert!(bounds.contains(&(6, 10)));
        assert!(bounds.contains(&(21, 25)));
        assert_eq!(bounds.len(), 3);
    }

    #[test]
    fn test_sorted_by_total_descending() {
        let data = entries(&[("02", 3), ("12", 9), ("13", 1), ("24", 4), ("21", 2)]);
        let buckets = aggregate(&data, 5).unwrap();
        let totals: Vec<u64> = buckets.iter().map(|b| b.total).collect();
        assert_eq!(totals, vec![10, 6, 3]);
        assert_eq!((buckets[0].lower, buckets[0].upper), (11, 15));
    }

    #[test]
    fn test_sum_preserved() {
        let data = entries(&[("01", 4), ("07", 2), ("08", 5), ("19", 1), ("25", 7)]);
        let buckets = aggregate(&data, 5).unwrap();
        let sum: u64 = buckets.iter().map(|b| b.total).sum();
        assert_eq!(sum, 19);
    }

    #[test]
    fn test_equal_totals_ordered_by_range() {
        let buckets = aggregate(&entries(&[("16", 2), ("03", 2)]), 5).unwrap();
        assert_eq!(buckets[0].lower, 1);
        assert_eq!(buckets[1].lower, 16);
    }

    #[test]
    fn test_custom_width() {
        let buckets = aggregate(&entries(&[("10", 1), ("11", 1)]), 10).unwrap();
        assert_eq!((buckets[0].lower, buckets[0].upper), (1, 10));
        assert_eq!((buckets[1].lower, buckets[1].upper), (11, 20));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(aggregate(&entries(&[("01", 1)]), 0).is_err());
        assert!(matches!(
            aggregate(&entries(&[("x1", 1)]), 5),
            Err(LotoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_number_rejected() {
        assert!(matches!(
            aggregate(&entries(&[("00", 3)]), 5),
            Err(LotoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_number_beyond_last_range_rejected() {
        assert!(matches!(
            aggregate(&entries(&[("4294967295", 1)]), 2),
            Err(LotoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_largest_number_in_exact_range() {
        let buckets = aggregate(&entries(&[("4294967295", 1)]), 5).unwrap();
        assert_eq!((buckets[0].lower, buckets[0].upper), (4294967291, 4294967295));
    }
}
