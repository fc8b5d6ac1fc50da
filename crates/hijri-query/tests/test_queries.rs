//! Query-engine integration tests: golden holiday resolutions for 1445 AH,
//! next-holiday scan invariants, and the Ramadan-year drift boundary.

use hijri_query::{
    holidays_for_hijri_year, holidays_on_hijri_day, next_holiday_from,
};
use hijri_time::{conversion, gregorian, tabular, CivilDate};

fn date(y: i32, m: u8, d: u8) -> CivilDate {
    CivilDate::new(y, m, d)
}

// ─── Year expansion ───────────────────────────────────────────────────────────

#[test]
fn holidays_for_1445() {
    let resolved = holidays_for_hijri_year(1445, 0);
    assert_eq!(resolved.len(), 16, "no entry should fail to resolve");

    // Ordered by (month, day), hence by Gregorian date as well.
    for pair in resolved.windows(2) {
        assert!(pair[0].gregorian < pair[1].gregorian);
    }

    let by_name = |name: &str| {
        resolved
            .iter()
            .find(|r| r.entry.name == name)
            .unwrap_or_else(|| panic!("{name} missing"))
    };
    assert_eq!(by_name("Islamic New Year").gregorian, date(2023, 7, 19));
    assert_eq!(by_name("Day of Ashura").gregorian, date(2023, 7, 28));
    assert_eq!(by_name("1st Day of Ramadan").gregorian, date(2024, 3, 11));
    assert_eq!(by_name("Eid-ul-Fitr").gregorian, date(2024, 4, 10));
    assert_eq!(by_name("Eid-ul-Adha").gregorian, date(2024, 6, 17));
}

#[test]
fn year_expansion_contains_the_direct_conversions() {
    // New Year and Eid-ul-Adha resolved directly must be members of the
    // year-expansion result set.
    let new_year = conversion::hijri_to_gregorian(1445, 1, 1, 0).unwrap();
    let eid = conversion::hijri_to_gregorian(1445, 12, 10, 0).unwrap();

    let dates: Vec<CivilDate> = holidays_for_hijri_year(1445, 0)
        .iter()
        .map(|r| r.gregorian)
        .collect();
    assert!(dates.contains(&new_year.gregorian));
    assert!(dates.contains(&eid.gregorian));
}

#[test]
fn year_expansion_honours_adjustment() {
    // An adjustment of +1 moves every resolved Gregorian date one day
    // earlier (the Hijri triple maps to an earlier civil day).
    let plain = holidays_for_hijri_year(1445, 0);
    let adjusted = holidays_for_hijri_year(1445, 1);
    for (p, a) in plain.iter().zip(&adjusted) {
        assert_eq!(p.entry.name, a.entry.name);
        let p_jdn = gregorian::to_jdn(p.gregorian.year, p.gregorian.month, p.gregorian.day).unwrap();
        let a_jdn = gregorian::to_jdn(a.gregorian.year, a.gregorian.month, a.gregorian.day).unwrap();
        assert_eq!(p_jdn - a_jdn, 1);
    }
}

// ─── Day lookup ───────────────────────────────────────────────────────────────

#[test]
fn day_lookup_is_year_independent() {
    let first = holidays_on_hijri_day(1, 9).unwrap();
    let again = holidays_on_hijri_day(1, 9).unwrap();
    assert_eq!(first, again);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].name, "1st Day of Ramadan");
}

// ─── Next-holiday scan ────────────────────────────────────────────────────────

#[test]
fn next_holiday_golden() {
    // From 1 March 2024 the next holiday is 1 Ramadan on 11 March.
    let next = next_holiday_from(date(2024, 3, 1), 360, 0).unwrap().unwrap();
    assert_eq!(next.gregorian, date(2024, 3, 11));
    assert_eq!(next.hijri, date(1445, 9, 1));
    assert_eq!(next.entries.len(), 1);
    assert_eq!(next.entries[0].name, "1st Day of Ramadan");
}

#[test]
fn scan_is_inclusive_of_the_start_date() {
    let next = next_holiday_from(date(2024, 3, 11), 360, 0).unwrap().unwrap();
    assert_eq!(next.gregorian, date(2024, 3, 11));
}

#[test]
fn scan_respects_the_adjustment() {
    // With adjustment +1, 10 March 2024 already reads as 1 Ramadan.
    let next = next_holiday_from(date(2024, 3, 1), 360, 1).unwrap().unwrap();
    assert_eq!(next.gregorian, date(2024, 3, 10));
    assert_eq!(next.hijri, date(1445, 9, 1));
}

#[test]
fn exhausted_horizon_is_an_empty_result() {
    // Only 5 days of horizon before 1 Ramadan: legitimately nothing found.
    assert_eq!(next_holiday_from(date(2024, 3, 1), 5, 0).unwrap(), None);
    // Zero horizon scans nothing at all.
    assert_eq!(next_holiday_from(date(2024, 3, 11), 0, 0).unwrap(), None);
}

#[test]
fn scan_rejects_bad_arguments() {
    assert!(next_holiday_from(date(2024, 3, 1), -1, 0).is_err());
    assert!(next_holiday_from(date(2023, 2, 29), 360, 0).is_err());
}

#[test]
fn no_day_before_the_result_matches() {
    for start in [
        date(2023, 8, 1),
        date(2024, 1, 1),
        date(2024, 6, 18),
        date(2025, 11, 30),
    ] {
        let next = next_holiday_from(start, 360, 0).unwrap().unwrap();
        let start_jdn = gregorian::to_jdn(start.year, start.month, start.day).unwrap();
        let hit_jdn =
            gregorian::to_jdn(next.gregorian.year, next.gregorian.month, next.gregorian.day)
                .unwrap();
        assert!(hit_jdn >= start_jdn, "result precedes the start date");
        let mut jdn = start_jdn;
        while jdn < hit_jdn {
            let (_, hm, hd) = tabular::from_jdn(jdn);
            assert!(
                holidays_on_hijri_day(hd, hm).unwrap().is_empty(),
                "missed a holiday at {jdn} scanning from {start}"
            );
            jdn = jdn + 1;
        }
    }
}

#[test]
fn a_360_day_horizon_always_finds_something() {
    // Every start day across one Gregorian year.
    let mut jdn = gregorian::to_jdn(2024, 1, 1).unwrap();
    let end = gregorian::to_jdn(2024, 12, 31).unwrap();
    while jdn <= end {
        let (y, m, d) = gregorian::from_jdn(jdn);
        let next = next_holiday_from(date(y, m, d), 360, 0).unwrap();
        assert!(next.is_some(), "horizon exhausted from {y}-{m:02}-{d:02}");
        jdn = jdn + 1;
    }
}
