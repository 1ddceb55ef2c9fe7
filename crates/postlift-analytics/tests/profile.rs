use postlift_analytics::{analyze_profile, weekday_label};
use postlift_core::{
    AnalysisConfig, CountryClassifier, ProfileSnapshot, RawProfileSnapshot, ThemeClassifier,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn two_post_snapshot() -> ProfileSnapshot {
    // Captions are 30 and 90 characters long.
    let caption_a = format!("{:<22}#grammar", "Articles in 1 minute");
    let caption_b = format!("{:<82}#grammar", "Present perfect vs past simple, explained with three short examples");
    assert_eq!(caption_a.chars().count(), 30);
    assert_eq!(caption_b.chars().count(), 90);

    let raw: RawProfileSnapshot = serde_json::from_value(serde_json::json!({
        "username": "all.american.eng",
        "display_name": "All American English",
        "bio": "American English coach",
        "followers": 5400,
        "posts": [
            {
                "url": "https://example.com/video/1",
                "views": 1000, "likes": 100, "comments": 20, "shares": 5, "saves": 0,
                "caption": caption_a,
                "published": "2024-01-01T09:05:00"
            },
            {
                "url": "https://example.com/video/2",
                "views": "2K", "likes": 50, "comments": 10, "shares": 5,
                "caption": caption_b,
                "published": "2024-01-03T09:40:00"
            }
        ]
    }))
    .expect("valid snapshot fixture");

    ProfileSnapshot::from_raw(raw, &ThemeClassifier)
}

#[test]
fn two_post_profile_end_to_end() {
    let snapshot = two_post_snapshot();
    let analysis = analyze_profile(&snapshot, &AnalysisConfig::default(), &CountryClassifier);

    assert_eq!(analysis.posts_analyzed, 2);
    assert_eq!(analysis.rated_posts, 2);
    assert_close(snapshot.posts[0].engagement_rate.unwrap(), 0.125);
    assert_close(snapshot.posts[1].engagement_rate.unwrap(), 0.0325);
    assert_close(analysis.engagement.mean, 0.078_75);
    assert_close(analysis.engagement.median, 0.078_75);

    let lift = &analysis.hashtag_lift;
    assert_close(lift.overall_average, 0.078_75);
    assert_eq!(lift.groups.len(), 1);
    assert_eq!(lift.groups[0].key, "#grammar");
    assert_eq!(lift.groups[0].sample_size, 2);
    assert_close(lift.groups[0].average_rate, 0.078_75);
    assert_close(lift.groups[0].lift, 0.0);

    let hours = &analysis.posting_windows.hours;
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].key, 9);
    assert_eq!(hours[0].sample_size, 2);
    assert_close(hours[0].average_rate, 0.078_75);
    assert!(analysis.posting_windows.weekdays.is_empty());

    let corr = &analysis.caption_correlation;
    assert_close(corr.coefficient.unwrap(), -1.0);
    assert_eq!(corr.buckets[1].sample_size, 1);
    assert_eq!(corr.buckets[4].sample_size, 1);

    assert_close(analysis.posts_per_week.unwrap(), 7.0);
    assert_eq!(analysis.dominant_theme, "grammar");
    assert_eq!(analysis.country, "United States");
    assert_close(analysis.avg_likes, 75.0);
    assert_close(analysis.avg_saves, 0.0);
    assert_eq!(weekday_label(0), "Mon");
}

#[test]
fn strict_threshold_hides_hashtag_group() {
    let snapshot = two_post_snapshot();
    let config = AnalysisConfig::new(3, 5, 3).expect("valid config");
    let analysis = analyze_profile(&snapshot, &config, &CountryClassifier);
    assert!(analysis.hashtag_lift.groups.is_empty());
    assert_close(analysis.hashtag_lift.overall_average, 0.078_75);
}

#[test]
fn analysis_serializes_to_json() {
    let snapshot = two_post_snapshot();
    let analysis = analyze_profile(&snapshot, &AnalysisConfig::default(), &CountryClassifier);
    let value = serde_json::to_value(&analysis).expect("serializable analysis");
    assert_eq!(value["username"], "all.american.eng");
    assert_eq!(value["caption_correlation"]["buckets"].as_array().map(Vec::len), Some(6));
}
