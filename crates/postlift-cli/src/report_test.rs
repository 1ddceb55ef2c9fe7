use chrono::NaiveDate;
use postlift_analytics::analyze_profile;
use postlift_core::{CountryClassifier, PostRecord, RawPost, ThemeClassifier};

use super::*;

fn raw_post(url: &str, views: u64, likes: u64, caption: &str, published: &str) -> RawPost {
    serde_json::from_value(serde_json::json!({
        "url": url,
        "views": views,
        "likes": likes,
        "caption": caption,
        "published": published,
    }))
    .unwrap()
}

fn snapshot(posts: Vec<RawPost>) -> ProfileSnapshot {
    ProfileSnapshot {
        username: "eng.tips".to_string(),
        display_name: "English Tips".to_string(),
        bio: "London based, British accent".to_string(),
        followers: 1_234_567,
        following: 42,
        posts: posts
            .into_iter()
            .map(|p| PostRecord::from_raw(p, &ThemeClassifier))
            .collect(),
    }
}

fn sample() -> (ProfileSnapshot, ProfileAnalysis) {
    let snap = snapshot(vec![
        raw_post("a", 1000, 100, "Idioms #vocab #fun", "2024-01-01T09:00:00"),
        raw_post("b", 1000, 50, "More idioms today #vocab", "2024-01-08T09:30:00"),
        raw_post("c", 0, 10, "No views yet #fun", "2024-01-09T18:00:00"),
    ]);
    let analysis = analyze_profile(&snap, &AnalysisConfig::default(), &CountryClassifier);
    (snap, analysis)
}

#[test]
fn summary_row_columns() {
    let (_, analysis) = sample();
    let row = SummaryRow::from_analysis(&analysis, &AnalysisConfig::default());

    assert_eq!(row.profile_name, "English Tips");
    assert_eq!(row.posts_analyzed, 3);
    assert_eq!(row.avg_likes, 53.3333);
    assert_eq!(row.engagement_rate_view_adj_mean, 0.075);
    assert_eq!(row.content_theme, "vocabulary");
    assert_eq!(row.hashtags_used, "#fun;#vocab");
    assert_eq!(row.country_region, "United Kingdom");
    assert_eq!(row.hashtag_efficiency_top, "#vocab:+0.0000(n=2)");
    assert_eq!(
        row.posting_window_performance,
        "hours[h9@0.0750(n=2)]|weekdays[Mon@0.0750(n=2)]"
    );
    assert_eq!(row.content_category_lift_top, "vocabulary:+0.0000(n=2)");
}

#[test]
fn summary_row_serializes_missing_cadence_as_null() {
    let snap = snapshot(vec![raw_post("a", 100, 5, "hi", "not a date")]);
    let analysis = analyze_profile(&snap, &AnalysisConfig::default(), &CountryClassifier);
    let row = SummaryRow::from_analysis(&analysis, &AnalysisConfig::default());
    let value = serde_json::to_value(&row).unwrap();
    assert!(value["post_frequency_per_week"].is_null());
    assert_eq!(value["caption_length_vs_er"], "r=N/A");
}

#[test]
fn lift_format_is_signed() {
    let groups = vec![
        GroupResult {
            key: "#a".to_string(),
            sample_size: 3,
            average_rate: 0.2,
            lift: 0.012_34,
        },
        GroupResult {
            key: "#b".to_string(),
            sample_size: 2,
            average_rate: 0.1,
            lift: -0.004,
        },
    ];
    assert_eq!(format_lift(&groups), "#a:+0.0123(n=3);#b:-0.0040(n=2)");
    assert_eq!(format_lift(&[]), "");
}

#[test]
fn empty_windows_format() {
    assert_eq!(
        format_windows(&TemporalReport::default()),
        "hours[]|weekdays[]"
    );
}

#[test]
fn correlation_format_lists_every_bucket() {
    let (_, analysis) = sample();
    let text = format_correlation(&analysis.caption_correlation);
    assert!(
        text.starts_with("r=-1.000; 0-20:0.1000(n=1);21-40:0.0500(n=1);41-60:0.0000(n=0)"),
        "got {text}"
    );
    assert!(text.ends_with("121+:0.0000(n=0)"), "got {text}");
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn caption_preview_truncates_long_text() {
    let long = "a".repeat(80);
    let preview = caption_preview(&long);
    assert_eq!(preview.chars().count(), 60);
    assert!(preview.ends_with("..."));
    assert_eq!(caption_preview("line one\nline two"), "line one line two");
}

#[test]
fn rounding() {
    assert_eq!(round_to(0.123_456_789, 6), 0.123_457);
    assert_eq!(round_to(53.333_333, 4), 53.3333);
}

#[test]
fn text_report_has_summary_and_post_lines() {
    let (snap, analysis) = sample();
    let text = render_text(&snap, &analysis, &AnalysisConfig::default());

    assert!(text.contains("Followers:              1,234,567"));
    assert!(text.contains("mean=0.0750, median=0.0750"));
    assert!(text.contains("Country/Region:         United Kingdom"));
    assert!(text.contains(" 01. views    1000"));
    assert!(text.contains("ER     NA | 2024-01-09 | No views yet #fun"));

    let day = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    assert!(text.contains(&day.format("%Y-%m-%d").to_string()));
}
