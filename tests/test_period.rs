//! Period index and month arithmetic.

use finanzas_sdk::Period;

// ---------------------------------------------------------------------------
// index
// ---------------------------------------------------------------------------

#[test]
fn index_is_strictly_monotonic_over_calendar_order() {
    let mut previous = Period::new(1, 2020).index();
    for year in 2020..=2030 {
        for month in 1..=12 {
            if (month, year) == (1, 2020) {
                continue;
            }
            let current = Period::new(month, year).index();
            assert!(
                current > previous,
                "{}-{} did not advance the index",
                year,
                month
            );
            previous = current;
        }
    }
}

#[test]
fn december_precedes_next_january() {
    assert!(Period::new(12, 2024).index() < Period::new(1, 2025).index());
    assert_eq!(
        Period::new(12, 2024).index() + 1,
        Period::new(1, 2025).index()
    );
}

#[test]
fn ordering_follows_index() {
    assert!(Period::new(12, 2024) < Period::new(1, 2025));
    assert!(Period::new(6, 2024) > Period::new(7, 2023));
    assert_eq!(Period::new(3, 2024), Period::new(3, 2024));
}

// ---------------------------------------------------------------------------
// plus_months / from_index
// ---------------------------------------------------------------------------

#[test]
fn plus_months_normalizes_across_year_boundary() {
    assert_eq!(Period::new(11, 2024).plus_months(3), Period::new(2, 2025));
}

#[test]
fn plus_months_handles_zero_and_full_years() {
    assert_eq!(Period::new(5, 2024).plus_months(0), Period::new(5, 2024));
    assert_eq!(Period::new(5, 2024).plus_months(24), Period::new(5, 2026));
}

#[test]
fn plus_months_goes_backwards() {
    assert_eq!(Period::new(2, 2025).plus_months(-3), Period::new(11, 2024));
    assert_eq!(Period::new(1, 2024).plus_months(-1), Period::new(12, 2023));
}

#[test]
fn from_index_round_trips() {
    for year in [2023, 2024, 2025] {
        for month in 1..=12 {
            let period = Period::new(month, year);
            assert_eq!(Period::from_index(period.index()), period);
        }
    }
}

#[test]
fn trailing_window_is_oldest_first_and_crosses_year_boundary() {
    let window = Period::new(2, 2025).trailing(6);
    assert_eq!(
        window,
        vec![
            Period::new(9, 2024),
            Period::new(10, 2024),
            Period::new(11, 2024),
            Period::new(12, 2024),
            Period::new(1, 2025),
            Period::new(2, 2025),
        ]
    );
    assert_eq!(Period::new(5, 2024).trailing(1), vec![Period::new(5, 2024)]);
    assert!(Period::new(5, 2024).trailing(0).is_empty());
}

#[test]
fn months_since_is_signed() {
    let start = Period::new(3, 2024);
    assert_eq!(Period::new(8, 2024).months_since(start), 5);
    assert_eq!(Period::new(2, 2024).months_since(start), -1);
}
