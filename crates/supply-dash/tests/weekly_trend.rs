use supply_dash::data::generator::generate_weekly_trend;
use supply_dash::random::{seeded_rng, FixedUnit};

#[test]
fn returns_twenty_four_labelled_weeks() {
    let points = generate_weekly_trend(&mut seeded_rng(Some(3)));
    assert_eq!(points.len(), 24);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.week, format!("W{:02}", i + 1));
    }
    assert_eq!(points[0].week, "W01");
    assert_eq!(points[23].week, "W24");
}

#[test]
fn delay_rate_stays_within_band() {
    for seed in 0..50 {
        for point in generate_weekly_trend(&mut seeded_rng(Some(seed))) {
            assert!(
                (0.8..=4.0).contains(&point.delay_rate),
                "delay rate {} out of range",
                point.delay_rate
            );
        }
    }
}

#[test]
fn mode_volumes_follow_noise_bands_at_bounds() {
    let low = &generate_weekly_trend(&mut FixedUnit(0.0))[0];
    assert!((low.land - 400.0 * 0.20 * 0.90).abs() < 1e-9);
    assert!((low.sea - 400.0 * 0.45 * 0.85).abs() < 1e-9);
    assert!((low.air - 400.0 * 0.25 * 0.80).abs() < 1e-9);
    assert!((low.rail - 400.0 * 0.10 * 0.95).abs() < 1e-9);
    assert!((low.delay_rate - 0.8).abs() < 1e-12);

    let high = &generate_weekly_trend(&mut FixedUnit(1.0))[0];
    assert!((high.land - 400.0 * 0.20 * 1.10).abs() < 1e-9);
    assert!((high.sea - 400.0 * 0.45 * 1.15).abs() < 1e-9);
    assert!((high.air - 400.0 * 0.25 * 1.20).abs() < 1e-9);
    assert!((high.rail - 400.0 * 0.10 * 1.05).abs() < 1e-9);
    assert!((high.delay_rate - 4.0).abs() < 1e-12);
}

#[test]
fn modes_are_not_normalised_to_the_weekly_base() {
    let high = &generate_weekly_trend(&mut FixedUnit(1.0))[0];
    let sum = high.land + high.sea + high.air + high.rail;
    assert!(
        sum > 400.0,
        "upper-bound modes should overshoot the base, got {sum}"
    );
}
