use tracing::debug;

use crate::data::datasets::{Category, RegionGroup, RegionMetadata, RegionalPerformanceRecord};
use crate::data::regions::default_regions;
use crate::random::UnitSource;

pub const MTD_FLOOR: f64 = 5.0;
pub const MTD_CEILING: f64 = 120.0;

pub fn tier_bonus(tier: u8) -> f64 {
    match tier {
        1 => 15.0,
        2 => 5.0,
        _ => -10.0,
    }
}

pub fn clamp_mtd(value: f64) -> f64 {
    value.clamp(MTD_FLOOR, MTD_CEILING)
}

pub fn generate_regional_performance<S: UnitSource + ?Sized>(
    category: Category,
    rng: &mut S,
) -> Vec<RegionalPerformanceRecord> {
    generate_regional_performance_from(default_regions(), category, rng)
}

pub fn generate_regional_performance_from<S: UnitSource + ?Sized>(
    regions: &[RegionMetadata],
    category: Category,
    rng: &mut S,
) -> Vec<RegionalPerformanceRecord> {
    let records = regions
        .iter()
        .enumerate()
        .map(|(index, meta)| score_region(category, index, meta, rng))
        .collect();
    let ranked = rank_by_mtd(records);
    debug!(
        category = %category,
        regions = ranked.len(),
        "generated regional performance"
    );
    ranked
}

fn score_region<S: UnitSource + ?Sized>(
    category: Category,
    index: usize,
    meta: &RegionMetadata,
    rng: &mut S,
) -> RegionalPerformanceRecord {
    let tier = f64::from(meta.tier);
    let mtd_achievement = clamp_mtd(70.0 + tier_bonus(meta.tier) + rng.uniform(0.0, 30.0));
    let ytd_achievement = 82.0 + rng.uniform(0.0, 15.0) - 2.0 * tier;
    let customer_base = if meta.tier == 1 { 2.0 } else { -2.0 };
    let customer_change = customer_base + rng.uniform(-5.0, 5.0);
    let mom_growth = (500.0 + rng.uniform(0.0, 1000.0)) * (4.0 - tier);
    let yoy_growth = (1000.0 + rng.uniform(0.0, 2000.0)) * (4.0 - tier);
    let manager_rate = 75.0 + rng.uniform(0.0, 25.0);

    RegionalPerformanceRecord {
        id: format!("{category}-{index}"),
        group: RegionGroup::from_tier(meta.tier),
        region: meta.name.clone(),
        ytd_achievement,
        mtd_achievement,
        customer_change,
        mom_growth,
        yoy_growth,
        manager_rate,
        rank: 0,
    }
}

/// Sorts descending by month-to-date achievement and assigns ranks from 1.
/// `sort_by` is stable, so equal values keep their incoming order.
pub fn rank_by_mtd(mut records: Vec<RegionalPerformanceRecord>) -> Vec<RegionalPerformanceRecord> {
    records.sort_by(|a, b| b.mtd_achievement.total_cmp(&a.mtd_achievement));
    for (position, record) in records.iter_mut().enumerate() {
        record.rank = position as u32 + 1;
    }
    records
}

#[cfg(test)]
mod tests {
    use super::{clamp_mtd, tier_bonus};

    #[test]
    fn clamp_bounds_mtd_to_floor_and_ceiling() {
        assert_eq!(clamp_mtd(-3.0), 5.0);
        assert_eq!(clamp_mtd(250.0), 120.0);
        assert_eq!(clamp_mtd(87.5), 87.5);
    }

    #[test]
    fn unknown_tiers_get_the_lowest_bonus() {
        assert_eq!(tier_bonus(1), 15.0);
        assert_eq!(tier_bonus(2), 5.0);
        assert_eq!(tier_bonus(3), -10.0);
        assert_eq!(tier_bonus(5), -10.0);
    }
}
