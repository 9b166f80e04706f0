use super::{filename, flowing_template, short_date};
use crate::blocks::{ContentBlock, Stat, TextRole};
use crate::layout::Align;
use crate::theme::RenderOptions;
use crate::DocumentTemplate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One mood check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub score: f32,
    pub label: String,
}

/// How many times an activity was completed over the reporting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub name: String,
    pub count: u32,
}

/// A summary of someone's activity over a date range. Every optional group
/// left out (or empty) is left off the report entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReportPayload {
    pub subject_name: String,
    pub date_range: DateRange,
    #[serde(default)]
    pub mood_series: Option<Vec<MoodEntry>>,
    #[serde(default)]
    pub activity_counts: Option<Vec<ActivityCount>>,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

impl ProgressReportPayload {
    /// Sum of every activity count
    pub fn activities_completed(&self) -> u64 {
        self.activity_counts
            .iter()
            .flatten()
            .map(|activity| u64::from(activity.count))
            .sum()
    }
}

/// Summary statistics of a mood series
#[derive(Debug, Clone, PartialEq)]
pub struct MoodSummary {
    pub entries: usize,
    pub average: f32,
    /// The label logged most often; ties go to the label logged first
    pub most_frequent: String,
    /// The highest-scoring entry; ties go to the earliest in the series
    pub best: MoodEntry,
}

impl MoodSummary {
    /// Returns [None] for an empty series
    pub fn from_series(series: &[MoodEntry]) -> Option<MoodSummary> {
        let first = series.first()?;

        let average = series.iter().map(|e| e.score).sum::<f32>() / series.len() as f32;

        let mut labels: Vec<(&str, usize)> = Vec::new();
        for entry in series {
            let label = entry.label.as_str();
            match labels.iter_mut().find(|(seen, _)| *seen == label) {
                Some((_, count)) => *count += 1,
                None => labels.push((label, 1)),
            }
        }
        let mut most_frequent = labels[0];
        for candidate in labels.iter().skip(1) {
            if candidate.1 > most_frequent.1 {
                most_frequent = *candidate;
            }
        }

        let mut best = first;
        for entry in series.iter().skip(1) {
            if entry.score.total_cmp(&best.score).is_gt() {
                best = entry;
            }
        }

        Some(MoodSummary {
            entries: series.len(),
            average,
            most_frequent: most_frequent.0.to_string(),
            best: best.clone(),
        })
    }

    fn describe(&self) -> String {
        format!(
            "Check-ins logged: {}\nAverage mood score: {:.1}\nMost frequent mood: {}\nBest day: {} ({}, {:.1})",
            self.entries,
            self.average,
            self.most_frequent,
            short_date(self.best.date),
            self.best.label,
            self.best.score,
        )
    }
}

/// Non-empty contents of an optional list, if there are any
fn present(items: &Option<Vec<String>>) -> Option<&Vec<String>> {
    items.as_ref().filter(|items| !items.is_empty())
}

/// A flowing, footered report: header, headline stats, then whichever of
/// mood trends, activity breakdown, achievements and recommendations there
/// is data for, closed off with a word of encouragement.
pub fn progress_report_template(
    payload: &ProgressReportPayload,
    options: &RenderOptions,
) -> DocumentTemplate {
    let mut template = flowing_template("progress-report", options);
    let start = payload.date_range.start.format("%Y-%m-%d").to_string();
    template.filename = filename(
        "progress-report",
        &["progress-report", payload.subject_name.as_str(), start.as_str()],
    );
    template
        .info
        .title(format!("Progress Report: {}", payload.subject_name))
        .subject(format!(
            "{} to {}",
            payload.date_range.start, payload.date_range.end
        ));

    template
        .push(ContentBlock::BrandHeader { compact: false })
        .push(ContentBlock::Title {
            title: "Progress Report".to_string(),
            subtitle: Some(payload.subject_name.clone()),
        })
        .push(ContentBlock::line(
            format!(
                "{} \u{2013} {}",
                short_date(payload.date_range.start),
                short_date(payload.date_range.end)
            ),
            TextRole::Caption,
            Align::Center,
        ))
        .push(ContentBlock::StatsPanel {
            stats: vec![
                Stat::new(payload.streak_days, "Day Streak"),
                Stat::new(payload.activities_completed(), "Activities Completed"),
                Stat::new(payload.total_points, "Points Earned"),
            ],
        });

    let mood = payload
        .mood_series
        .as_deref()
        .and_then(MoodSummary::from_series);
    if let Some(mood) = mood {
        template.push(ContentBlock::section("Mood Trends", mood.describe()));
    }

    if let Some(activities) = payload
        .activity_counts
        .as_ref()
        .filter(|activities| !activities.is_empty())
    {
        let items = activities
            .iter()
            .map(|activity| format!("{}: {}", activity.name, activity.count))
            .collect();
        template.push(ContentBlock::bullets(Some("Activity Breakdown"), items));
    }

    if let Some(achievements) = present(&payload.achievements) {
        template.push(ContentBlock::bullets(Some("Achievements"), achievements.clone()));
    }

    if let Some(recommendations) = present(&payload.recommendations) {
        template.push(ContentBlock::bullets(
            Some("Recommendations"),
            recommendations.clone(),
        ));
    }

    template.push(ContentBlock::Callout {
        heading: "Keep Going".to_string(),
        body: format!(
            "Every check-in is a step forward, {}. Small, steady habits add up over time, \
             so keep showing up for yourself.",
            payload.subject_name
        ),
    });

    template
}
