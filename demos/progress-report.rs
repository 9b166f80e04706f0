use chrono::NaiveDate;
use pdf_compose::{
    ActivityCount, DateRange, DirectoryDelivery, Engine, FileDelivery, MoodEntry,
    ProgressReportPayload, RenderOptions,
};

fn main() {
    let date = |day| NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
    let moods = ["Calm", "Happy", "Tired", "Calm", "Hopeful", "Calm", "Happy"];

    let payload = ProgressReportPayload {
        subject_name: "Sam Rivera".to_string(),
        date_range: DateRange {
            start: date(1),
            end: date(31),
        },
        mood_series: Some(
            moods
                .iter()
                .enumerate()
                .map(|(i, label)| MoodEntry {
                    date: date(i as u32 * 4 + 1),
                    score: 2.5 + (i % 3) as f32,
                    label: label.to_string(),
                })
                .collect(),
        ),
        activity_counts: Some(vec![
            ActivityCount {
                name: "Meditation".to_string(),
                count: 14,
            },
            ActivityCount {
                name: "Journaling".to_string(),
                count: 9,
            },
            ActivityCount {
                name: "Evening walk".to_string(),
                count: 17,
            },
        ]),
        streak_days: 12,
        total_points: 340,
        achievements: Some(vec![
            "First full week of daily check-ins".to_string(),
            "Ten meditation sessions".to_string(),
        ]),
        recommendations: Some(vec![
            "Try a short breathing exercise on days that start out tired.".to_string(),
            "Keep the evening walks going; they line up with your best days.".to_string(),
        ]),
    };

    let mut options = RenderOptions::new();
    options.footer_year(2026).compress(false);

    let sealed = Engine::new(options).render_progress_report(&payload).unwrap();
    DirectoryDelivery::new(".").deliver(&sealed).unwrap();
}
