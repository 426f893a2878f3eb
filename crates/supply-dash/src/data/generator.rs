use tracing::debug;

use super::datasets::{MonthlyTrendPoint, WeeklyModePoint};
use crate::random::UnitSource;

pub const MONTHS: usize = 12;
pub const WEEKS: usize = 24;
pub const REPORT_YEAR: u32 = 2024;

// Dip in February for the spring festival, peak in Q4.
pub const SEASONALITY: [f64; MONTHS] = [
    0.95, 0.65, 1.05, 1.1, 1.08, 1.15, 1.12, 1.25, 1.35, 1.45, 1.75, 1.6,
];

const MONTHLY_BASE_INCOME: f64 = 1500.0;
const TRANSPORT_SHARE: f64 = 0.65;
const WAREHOUSE_SHARE: f64 = 0.35;

const WEEKLY_BASE_VOLUME: f64 = 400.0;

/// Share of the weekly base per transport mode and the multiplicative noise
/// band applied to it. Bands are independent, so the four modes do not sum
/// back to the base.
#[derive(Clone, Copy, Debug)]
struct ModeShape {
    share: f64,
    low: f64,
    high: f64,
}

const LAND: ModeShape = ModeShape {
    share: 0.20,
    low: 0.90,
    high: 1.10,
};
const SEA: ModeShape = ModeShape {
    share: 0.45,
    low: 0.85,
    high: 1.15,
};
const AIR: ModeShape = ModeShape {
    share: 0.25,
    low: 0.80,
    high: 1.20,
};
const RAIL: ModeShape = ModeShape {
    share: 0.10,
    low: 0.95,
    high: 1.05,
};

pub fn generate_monthly_trend<S: UnitSource + ?Sized>(rng: &mut S) -> Vec<MonthlyTrendPoint> {
    let mut out = Vec::with_capacity(MONTHS);

    for (i, multiplier) in SEASONALITY.iter().enumerate() {
        let noise = 1.0 + rng.uniform(-0.05, 0.05);
        let total_income = MONTHLY_BASE_INCOME * multiplier * noise;
        let target_rate = 88.0 + rng.uniform(0.0, 18.0);

        out.push(MonthlyTrendPoint {
            month: month_label(i),
            total_income,
            transport_income: total_income * TRANSPORT_SHARE,
            warehouse_income: total_income * WAREHOUSE_SHARE,
            target_rate,
        });
    }

    debug!(points = out.len(), "generated monthly trend");
    out
}

pub fn generate_weekly_trend<S: UnitSource + ?Sized>(rng: &mut S) -> Vec<WeeklyModePoint> {
    let mut out = Vec::with_capacity(WEEKS);

    for i in 0..WEEKS {
        let land = mode_volume(rng, LAND);
        let sea = mode_volume(rng, SEA);
        let air = mode_volume(rng, AIR);
        let rail = mode_volume(rng, RAIL);
        let delay_rate = 0.8 + rng.uniform(0.0, 3.2);

        out.push(WeeklyModePoint {
            week: week_label(i),
            land,
            sea,
            air,
            rail,
            delay_rate,
        });
    }

    debug!(points = out.len(), "generated weekly trend");
    out
}

fn mode_volume<S: UnitSource + ?Sized>(rng: &mut S, shape: ModeShape) -> f64 {
    WEEKLY_BASE_VOLUME * shape.share * rng.uniform(shape.low, shape.high)
}

pub fn month_label(index: usize) -> String {
    format!("{REPORT_YEAR}-{:02}", index + 1)
}

pub fn week_label(index: usize) -> String {
    format!("W{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::{month_label, week_label, SEASONALITY};

    #[test]
    fn labels_are_zero_padded_and_one_based() {
        assert_eq!(month_label(0), "2024-01");
        assert_eq!(month_label(11), "2024-12");
        assert_eq!(week_label(0), "W01");
        assert_eq!(week_label(23), "W24");
    }

    #[test]
    fn seasonality_troughs_in_february_and_peaks_in_q4() {
        let (trough, _) = SEASONALITY
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .expect("non-empty table");
        let (peak, _) = SEASONALITY
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .expect("non-empty table");
        assert_eq!(trough, 1);
        assert!((9..=10).contains(&peak), "unexpected peak index {peak}");
    }
}
