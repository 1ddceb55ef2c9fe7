//! Presentation of a [`ProfileAnalysis`]: the compact summary row and the
//! console report. The analytics crate only returns structured data; every
//! string encoding lives here.

use postlift_analytics::{
    weekday_label, CorrelationResult, GroupResult, ProfileAnalysis, TemporalReport,
};
use postlift_core::{AnalysisConfig, ProfileSnapshot};
use serde::Serialize;

const CAPTION_PREVIEW_CHARS: usize = 60;

/// One row per profile, columns in export order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SummaryRow {
    pub profile_name: String,
    pub username: String,
    pub posts_analyzed: usize,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub engagement_rate_view_adj_mean: f64,
    pub post_frequency_per_week: Option<f64>,
    pub content_theme: String,
    pub avg_shares: f64,
    pub avg_saves: f64,
    pub hashtags_used: String,
    pub country_region: String,
    pub hashtag_efficiency_top: String,
    pub posting_window_performance: String,
    pub caption_length_vs_er: String,
    pub content_category_lift_top: String,
}

impl SummaryRow {
    pub(crate) fn from_analysis(analysis: &ProfileAnalysis, config: &AnalysisConfig) -> Self {
        Self {
            profile_name: analysis.display_name.clone(),
            username: analysis.username.clone(),
            posts_analyzed: analysis.posts_analyzed,
            avg_likes: round_to(analysis.avg_likes, 4),
            avg_comments: round_to(analysis.avg_comments, 4),
            engagement_rate_view_adj_mean: round_to(analysis.engagement.mean, 6),
            post_frequency_per_week: analysis.posts_per_week.map(|f| round_to(f, 4)),
            content_theme: analysis.dominant_theme.clone(),
            avg_shares: round_to(analysis.avg_shares, 4),
            avg_saves: round_to(analysis.avg_saves, 4),
            hashtags_used: analysis.hashtags_used.join(";"),
            country_region: analysis.country.clone(),
            hashtag_efficiency_top: format_lift(analysis.hashtag_lift.top(config.top_lift())),
            posting_window_performance: format_windows(&analysis.posting_windows),
            caption_length_vs_er: format_correlation(&analysis.caption_correlation),
            content_category_lift_top: format_lift(analysis.category_lift.top(config.top_lift())),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// `#tag:+0.0123(n=3);#other:-0.0040(n=2)`
pub(crate) fn format_lift(groups: &[GroupResult]) -> String {
    groups
        .iter()
        .map(|g| format!("{}:{:+.4}(n={})", g.key, g.lift, g.sample_size))
        .collect::<Vec<_>>()
        .join(";")
}

/// `hours[h9@0.0788(n=2)]|weekdays[Mon@0.0500(n=3)]`
pub(crate) fn format_windows(report: &TemporalReport) -> String {
    let hours = report
        .hours
        .iter()
        .map(|w| format!("h{}@{:.4}(n={})", w.key, w.average_rate, w.sample_size))
        .collect::<Vec<_>>()
        .join(",");
    let weekdays = report
        .weekdays
        .iter()
        .map(|w| {
            format!(
                "{}@{:.4}(n={})",
                weekday_label(w.key),
                w.average_rate,
                w.sample_size
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("hours[{hours}]|weekdays[{weekdays}]")
}

/// `r=0.123; 0-20:0.0500(n=2);21-40:...` or `r=N/A`.
pub(crate) fn format_correlation(result: &CorrelationResult) -> String {
    let Some(r) = result.coefficient else {
        return "r=N/A".to_string();
    };
    let buckets = result
        .buckets
        .iter()
        .map(|b| format!("{}:{:.4}(n={})", b.label, b.average_rate, b.sample_size))
        .collect::<Vec<_>>()
        .join(";");
    format!("r={r:.3}; {buckets}")
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn caption_preview(caption: &str) -> String {
    let flat = caption.replace('\n', " ");
    if flat.chars().count() > CAPTION_PREVIEW_CHARS {
        let head: String = flat.chars().take(CAPTION_PREVIEW_CHARS - 3).collect();
        format!("{head}...")
    } else {
        flat
    }
}

/// Console summary followed by one line per post.
pub(crate) fn render_text(
    snapshot: &ProfileSnapshot,
    analysis: &ProfileAnalysis,
    config: &AnalysisConfig,
) -> String {
    let cadence = analysis
        .posts_per_week
        .map_or_else(|| "Unknown".to_string(), |f| format!("{f:.4}"));

    let mut lines = vec![
        format!("===== @{} ({}) =====", analysis.username, analysis.display_name),
        format!("Followers:              {}", group_thousands(analysis.followers)),
        format!("Following:              {}", group_thousands(analysis.following)),
        format!(
            "Analyzed posts:         {} ({} rated)",
            analysis.posts_analyzed, analysis.rated_posts
        ),
        format!("Avg likes:              {:.2}", analysis.avg_likes),
        format!("Avg comments:           {:.2}", analysis.avg_comments),
        format!(
            "View-adjusted ER:       mean={:.4}, median={:.4}",
            analysis.engagement.mean, analysis.engagement.median
        ),
        format!("Post frequency:         {cadence} posts/week"),
        format!("Content theme:          {}", analysis.dominant_theme),
        format!(
            "Avg shares / saves:     {:.2} / {:.2}",
            analysis.avg_shares, analysis.avg_saves
        ),
        format!("Country/Region:         {}", analysis.country),
        format!(
            "Hashtag lift:           {}",
            format_lift(analysis.hashtag_lift.top(config.top_lift()))
        ),
        format!(
            "Category lift:          {}",
            format_lift(analysis.category_lift.top(config.top_lift()))
        ),
        format!(
            "Posting windows:        {}",
            format_windows(&analysis.posting_windows)
        ),
        format!(
            "Caption length vs ER:   {}",
            format_correlation(&analysis.caption_correlation)
        ),
        String::new(),
        "Per-post snapshot (views, likes, comments, shares, ER, date, caption):".to_string(),
    ];

    for (i, post) in snapshot.posts.iter().enumerate() {
        let er = post
            .engagement_rate
            .map_or_else(|| "NA".to_string(), |r| format!("{r:.4}"));
        let date = post
            .timestamp
            .map_or_else(|| "?".to_string(), |ts| ts.format("%Y-%m-%d").to_string());
        lines.push(format!(
            " {:02}. views {:>7} | likes {:>6} | comments {:>5} | shares {:>5} | ER {:>6} | {} | {}",
            i + 1,
            post.counts.views,
            post.counts.likes,
            post.counts.comments,
            post.counts.shares,
            er,
            date,
            caption_preview(&post.caption)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
