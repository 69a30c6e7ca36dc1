//! Integration tests for whole-sheet validation.

use std::sync::Arc;

use availcheck::validation::{CAPTION_INCLUDED_ERROR, CAPTION_INCLUDED_EXPECTED};
use availcheck::{validate_sheet, Severity, Spec, SpecVersion};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn movie_header() -> Vec<String> {
    strings(&[
        "AvailID", "Territory", "TitleInternalAlias", "Start", "End", "LicenseType",
        "FormatProfile", "PriceType", "PriceValue", "SRP", "CaptionIncluded", "ExceptionFlag",
    ])
}

fn tv_header() -> Vec<String> {
    strings(&[
        "AvailID", "Territory", "WorkType", "TitleInternalAlias", "Start", "End", "LicenseType",
        "FormatProfile", "PriceType", "PriceValue", "SRP", "CaptionIncluded", "CaptionExemption",
        "ExceptionFlag",
    ])
}

fn movie_row(territory: &str, caption: &str) -> Vec<String> {
    strings(&[
        "AVAIL-001", territory, "The Big Movie", "2020-01-01", "2020-06-30", "EST", "HD", "SRP",
        "9.99", "", caption, "",
    ])
}

#[test]
fn test_us_caption_maybe_is_one_error() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let summary = validate_sheet(&spec, "Avails", 0, &movie_header(), &[movie_row("US", "Maybe")]);

    assert_eq!(summary.error_count(), 1);
    let slot = summary.error_log().next().unwrap();
    assert_eq!(slot.entry.severity(), Severity::Error);
    assert_eq!(slot.entry.message(), CAPTION_INCLUDED_ERROR);
    assert_eq!(slot.entry.expected(), CAPTION_INCLUDED_EXPECTED);
}

#[test]
fn test_tv_season_row_is_exempt_from_captions() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6Tv).unwrap());
    let rows = vec![strings(&[
        "AVAIL-002", "US", "Season 1", "The Big Show", "2020-01-01", "2020-06-30", "SVOD", "HD",
        "Tier", "2.99", "", "", "", "",
    ])];
    let summary = validate_sheet(&spec, "TV Avails", 0, &tv_header(), &rows);

    assert_eq!(summary.error_count(), 0);
}

#[test]
fn test_repeated_violation_accumulates_locations() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let rows = vec![
        movie_row("US", "Maybe"),
        movie_row("US", "Sometimes"),
        movie_row("US", "Maybe"),
    ];
    let summary = validate_sheet(&spec, "Avails", 0, &movie_header(), &rows);

    // Same message, expected text and severity: one ledger entry, three
    // occurrences, first-seen representative value.
    assert_eq!(summary.error_columns_count(), 1);
    assert_eq!(summary.error_count(), 3);
    assert_eq!(summary.error_counts()[&Severity::Error], 3);

    let slot = summary.error_log().next().unwrap();
    assert_eq!(slot.count, 3);
    assert_eq!(slot.entry.value(), "Maybe");
    assert_eq!(slot.entry.locations().len(), 3);
}

#[test]
fn test_missing_territory_column_does_not_cascade() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let header = strings(&[
        "AvailID", "TitleInternalAlias", "Start", "End", "LicenseType", "FormatProfile",
        "PriceType", "PriceValue", "SRP", "CaptionIncluded", "ExceptionFlag",
    ]);
    let rows = vec![strings(&[
        "AVAIL-001", "The Big Movie", "2020-01-01", "2020-06-30", "EST", "HD", "SRP", "9.99", "",
        "Maybe", "",
    ])];
    let summary = validate_sheet(&spec, "Avails", 0, &header, &rows);

    // Exactly one critical finding for the absent column; the caption rule
    // stays quiet instead of piling on a misleading row error per data row.
    assert_eq!(summary.error_counts()[&Severity::Critical], 1);
    assert!(!summary
        .error_log()
        .any(|slot| slot.entry.message() == CAPTION_INCLUDED_ERROR));
}

#[test]
fn test_tv_missing_work_type_column_does_not_cascade() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6Tv).unwrap());
    let header = strings(&[
        "AvailID", "Territory", "TitleInternalAlias", "Start", "End", "LicenseType",
        "FormatProfile", "PriceType", "PriceValue", "SRP", "CaptionIncluded", "CaptionExemption",
        "ExceptionFlag",
    ]);
    let rows = vec![
        strings(&[
            "AVAIL-002", "US", "The Big Show", "2020-01-01", "2020-06-30", "SVOD", "HD", "Tier",
            "2.99", "", "Maybe", "", "",
        ]),
        strings(&[
            "AVAIL-003", "US", "The Big Show", "2020-01-01", "2020-06-30", "SVOD", "HD", "Tier",
            "2.99", "", "Maybe", "", "",
        ]),
    ];
    let summary = validate_sheet(&spec, "TV Avails", 0, &header, &rows);

    // One critical finding for the absent WorkType column; the caption rule
    // cannot decide the season exemption without it and stays quiet instead
    // of raising an error per data row.
    assert_eq!(summary.error_counts()[&Severity::Critical], 1);
    assert!(!summary
        .error_log()
        .any(|slot| slot.entry.message() == CAPTION_INCLUDED_ERROR));
}

#[test]
fn test_unsupported_header_is_critical() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let mut header = movie_header();
    header.push("Ratings".to_string());
    let summary = validate_sheet(&spec, "Avails", 0, &header, &[movie_row("GB", "")]);

    assert_eq!(summary.error_counts()[&Severity::Critical], 1);
    assert_eq!(summary.error_count(), 1);
}

#[test]
fn test_open_window_surfaces_as_notification() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let mut row = movie_row("GB", "");
    row[4] = "Open".to_string();
    let summary = validate_sheet(&spec, "Avails", 0, &movie_header(), &[row]);

    assert_eq!(summary.error_count(), 0);
    assert_eq!(summary.notification_count(), 1);
    assert_eq!(summary.error_counts()[&Severity::Notification], 1);
}

#[test]
fn test_independent_defects_each_report() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let mut row = movie_row("GB", "");
    row[2] = "The <Big> Movie".to_string();
    row[8] = "".to_string(); // required PriceValue left empty
    let summary = validate_sheet(&spec, "Avails", 0, &movie_header(), &[row]);

    assert_eq!(summary.error_count(), 2);
    assert_eq!(summary.error_columns_count(), 2);
}

#[test]
fn test_json_report_shape() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let summary = validate_sheet(&spec, "Avails", 2, &movie_header(), &[movie_row("US", "Maybe")]);

    let report = summary.json_report();
    assert_eq!(report["sheet_name"], "Avails");
    assert_eq!(report["sheet_index"], 2);
    assert_eq!(report["excel_sheet_index"], 3);
    assert_eq!(report["spec_version"], "Avails 1.6");
    assert_eq!(report["errors"].as_array().unwrap().len(), 1);
    assert_eq!(report["errors"][0]["occurrences"], 1);
    assert_eq!(report["severity_counts"]["Error"], 1);
}

#[test]
fn test_formatted_summary_resolves_column_names() {
    let spec = Arc::new(Spec::for_version(SpecVersion::V1_6).unwrap());
    let mut row = movie_row("XYZ", "");
    row[8] = "free".to_string();
    let summary = validate_sheet(&spec, "Avails", 0, &movie_header(), &[row]);

    let printed = summary.print_sheet_error_summary();
    assert!(printed.contains("Territory"), "{printed}");
    assert!(printed.contains("PriceValue"), "{printed}");
}
