//! End-to-end report building against the built-in catalogs.

use ank_base::{DashaLevel, PlaneStatus};
use ank_config::{NumerologyConfig, builtin_catalog};
use ank_report::{
    DashaCalendar, DynamicAnalysis, ReportError, ReportInput, ValidatedInput, build_report,
    dynamic_summary, foundational_prompt, report_on,
};
use ank_time::NaiveDate;
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn foundational_report_1987() {
    let catalog = builtin_catalog().unwrap();
    let config = NumerologyConfig::default();
    let report = build_report(&ReportInput::new("Asha Rao", "22/04/1987"), &catalog, &config).unwrap();

    assert_eq!((report.core.basic, report.core.destiny), (4, 6));
    assert_eq!(report.dominant_digits, vec![2, 4]);
    let statuses: Vec<PlaneStatus> = report.planes.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        [PlaneStatus::Strong, PlaneStatus::Balanced, PlaneStatus::Balanced]
    );

    let names: Vec<&str> = report.yogas.iter().map(|y| y.name.as_str()).collect();
    assert!(names.contains(&"Raj Yoga"));
    assert!(names.contains(&"Plane of Thought"));
    assert!(names.contains(&"Plane of Action"));
    assert!(!names.contains(&"Golden Yoga"));

    let digits: Vec<u8> = report.recurrences.iter().map(|r| r.digit).collect();
    assert_eq!(digits, [2, 4]);
    assert!(report.recurrences[1].influence.starts_with("Repeated 4 adds discipline"));

    let prompt = foundational_prompt(&report).unwrap();
    assert!(prompt.contains("- Raj Yoga: Leadership paired with diplomacy"));
    assert!(prompt.contains("- Number 2 (appears 2 times): Two 2s sharpen intuition"));
    assert!(prompt.contains("User's Basic Number: 4, Destiny Number: 6."));
}

#[test]
fn prompt_lines_are_newline_terminated() {
    let catalog = builtin_catalog().unwrap();
    let config = NumerologyConfig::default();
    let report = build_report(&ReportInput::new("Asha Rao", "22/04/1987"), &catalog, &config).unwrap();
    let prompt = foundational_prompt(&report).unwrap();
    let last_recurrence = prompt.lines().rfind(|l| l.starts_with("- Number ")).unwrap();
    assert!(prompt.contains(&format!("{last_recurrence}\n\nUser's Basic Number: 4")));
    assert!(prompt.contains("\nInfluence of Recurring Numbers:\n- Number 2"));
}

#[test]
fn builtin_remedies_for_destiny_six() {
    let catalog = builtin_catalog().unwrap();
    let config = NumerologyConfig::default();
    let input = ValidatedInput {
        name: "Asha Rao".into(),
        dob: ank_time::BirthDate::new(22, 4, 1987),
    };
    let report = report_on(&input, &catalog, &config, ymd(2025, 6, 15));
    assert_eq!((report.cycles.year, report.cycles.month), (8, 5));
    let titles: Vec<&str> = report.remedies.iter().map(|r| r.title.as_str()).collect();
    // Only one 8 in the date digits, so no Saturn rule in a personal year 8.
    assert_eq!(titles, ["Venus Harmony"]);
}

#[test]
fn invalid_input_is_rejected_before_any_computation() {
    let catalog = builtin_catalog().unwrap();
    let config = NumerologyConfig::default();
    let err = build_report(&ReportInput::new("Asha", "30/02/1990"), &catalog, &config).unwrap_err();
    assert!(matches!(err, ReportError::Date(_)));
    let err = build_report(&ReportInput::new("A", "01/01/1990"), &catalog, &config).unwrap_err();
    assert!(matches!(err, ReportError::InvalidName(_)));
}

#[test]
fn dynamic_analysis_and_summary() {
    let catalog = builtin_catalog().unwrap();
    let config = NumerologyConfig::default();
    let report = build_report(&ReportInput::new("Asha Rao", "22/04/1987"), &catalog, &config).unwrap();
    let calendar = DashaCalendar::new(report.dob, &config.tiler_config());
    let date = ymd(2024, 6, 1);

    let analysis = DynamicAnalysis::compute(
        &report,
        &calendar,
        &catalog,
        date,
        DashaLevel::Daily,
        &config.recurrence_options(),
    );
    assert_eq!(analysis.snapshot.periods().len(), 4);
    assert_eq!(analysis.snapshot.yearly.unwrap().year, Some(2024));
    assert!(analysis.dominant_number.is_some());
    for formed in &analysis.yogas {
        assert!(!report.yogas.iter().any(|y| y.name == formed.yoga.name));
    }

    let summary = dynamic_summary(&analysis);
    assert!(summary.starts_with("For 01 Jun 2024, your active layers are Maha "));
    assert!(summary.contains(", and Daily "));
    assert!(summary.ends_with("Align plans with its qualities where possible."));
}

proptest! {
    #[test]
    fn calendar_snapshot_agrees_with_timelines(offset in 0i64..40_000) {
        let config = NumerologyConfig::default();
        let dob = ank_time::BirthDate::new(29, 2, 1988);
        let calendar = DashaCalendar::new(dob, &config.tiler_config());
        let date = ymd(1988, 2, 29) + chrono::Duration::days(offset);
        let snap = calendar.snapshot(date);
        for p in snap.periods() {
            prop_assert!(p.contains(date));
        }
        prop_assert!(snap.maha.is_some());
        prop_assert!(snap.yearly.is_some());
        use chrono::Datelike;
        let (birthday, _) = ank_base::dasha::dasha_year_span(&dob, date.year()).unwrap();
        prop_assert_eq!(snap.monthly.is_some(), date >= birthday);
        prop_assert_eq!(snap.daily.is_some(), date >= birthday);
        if let Some(m) = snap.monthly {
            prop_assert_eq!(m.year, Some(date.year()));
        }
    }
}
