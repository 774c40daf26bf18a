//! Golden values and properties for reduction, core numbers and the grid.

use ank_base::grid::date_digit_string;
use ank_base::{
    CoreNumbers, DigitHistogram, Plane, PlaneStatus, build_grid, next_number, plane_status,
    planes, reduce_to_digit,
};
use ank_time::BirthDate;
use proptest::prelude::*;

#[test]
fn april_1987_chart() {
    let grid = build_grid(&BirthDate::new(22, 4, 1987), false);
    assert_eq!(grid.core, CoreNumbers { basic: 4, destiny: 6 });
    let counts: Vec<u32> = (1..=9).map(|d| grid.histogram.get(d)).collect();
    assert_eq!(counts, [1, 2, 0, 2, 0, 1, 1, 1, 1]);
    let p = planes(&grid.histogram);
    assert_eq!(p[0].status, PlaneStatus::Strong); // 1, 4, 7
    assert_eq!(p[1].status, PlaneStatus::Balanced); // 6, 9
    assert_eq!(p[2].status, PlaneStatus::Balanced); // 2, 8
}

#[test]
fn may_2005_chart() {
    let grid = build_grid(&BirthDate::new(5, 5, 2005), false);
    assert_eq!(grid.core, CoreNumbers { basic: 5, destiny: 8 });
    assert_eq!(grid.histogram, DigitHistogram::from_counts([0, 1, 0, 0, 3, 0, 0, 1, 0]));
    assert_eq!(plane_status(&grid.histogram, Plane::Physical), PlaneStatus::Missing);
    assert_eq!(plane_status(&grid.histogram, Plane::Emotional), PlaneStatus::Strong);
}

#[test]
fn padded_digit_string() {
    assert_eq!(date_digit_string(&BirthDate::new(5, 5, 2005)), "05052005");
    assert_eq!(date_digit_string(&BirthDate::new(1, 10, 1900)), "01101900");
}

fn birth_dates() -> impl Strategy<Value = BirthDate> {
    (1u32..=31, 1u32..=12, 1000i32..=9999).prop_map(|(d, m, y)| BirthDate::new(d, m, y))
}

proptest! {
    #[test]
    fn reduce_is_idempotent_and_single_digit(n in 1u64..=u64::MAX / 2) {
        let r = reduce_to_digit(n);
        prop_assert!((1..=9).contains(&r));
        prop_assert_eq!(reduce_to_digit(u64::from(r)), r);
    }

    #[test]
    fn core_numbers_in_range(dob in birth_dates()) {
        let core = CoreNumbers::from_date(&dob);
        prop_assert!((1..=9).contains(&core.basic));
        prop_assert!((1..=9).contains(&core.destiny));
    }

    #[test]
    fn base_total_counts_nonzero_digits(dob in birth_dates()) {
        let grid = build_grid(&dob, false);
        let nonzero = date_digit_string(&dob).chars().filter(|c| *c != '0').count();
        prop_assert_eq!(grid.base.total() as usize, nonzero);
        let injected = 1 + u32::from(dob.day > 9 && dob.day % 10 != 0);
        prop_assert_eq!(grid.histogram.total(), grid.base.total() + injected);
    }

    #[test]
    fn next_number_cycles(n in 1u8..=9) {
        let expected = if n == 9 { 1 } else { n + 1 };
        prop_assert_eq!(next_number(n), expected);
        let mut m = n;
        for _ in 0..9 {
            m = next_number(m);
        }
        prop_assert_eq!(m, n);
    }

    #[test]
    fn plane_status_by_present_digits(mask in 0u8..8, extra in 0u32..3) {
        let digits = Plane::Mental.digits();
        let mut hist = DigitHistogram::empty();
        let mut present = 0;
        for (i, d) in digits.iter().enumerate() {
            if mask & (1 << i) != 0 {
                present += 1;
                for _ in 0..=extra {
                    hist = hist.with_added(*d);
                }
            }
        }
        let expected = [PlaneStatus::Missing, PlaneStatus::Weak, PlaneStatus::Balanced, PlaneStatus::Strong][present];
        prop_assert_eq!(plane_status(&hist, Plane::Mental), expected);
    }
}
