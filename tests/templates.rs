use chrono::NaiveDate;
use pdf_compose::layout::LayoutMode;
use pdf_compose::{
    stamp_footers, ActivityCount, CertificatePayload, DateRange, DirectoryDelivery, Document,
    Engine, FileDelivery, GuideSection, MoodEntry, ProgressReportPayload, RenderOptions,
    ResourceGuidePayload, SpanLayout,
};

fn engine() -> Engine {
    let mut options = RenderOptions::new();
    options.footer_year(2026);
    Engine::new(options)
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn report() -> ProgressReportPayload {
    ProgressReportPayload {
        subject_name: "Sam Rivera".to_string(),
        date_range: DateRange {
            start: date(1),
            end: date(31),
        },
        mood_series: None,
        activity_counts: Some(vec![ActivityCount {
            name: "Meditation".to_string(),
            count: 5,
        }]),
        streak_days: 12,
        total_points: 340,
        achievements: None,
        recommendations: None,
    }
}

fn certificate(description: &str) -> CertificatePayload {
    CertificatePayload {
        recipient_name: "Avery Quinn".to_string(),
        achievement_title: "Mindful Mornings".to_string(),
        achievement_description: description.to_string(),
        completion_date: date(5),
    }
}

fn guide(sections: usize) -> ResourceGuidePayload {
    ResourceGuidePayload {
        title: "Coping with Stress".to_string(),
        description: lipsum::lipsum(50),
        sections: (1..=sections)
            .map(|i| GuideSection {
                title: format!("Topic {i}"),
                body: lipsum::lipsum(180),
                tips: Some(vec![lipsum::lipsum(10), lipsum::lipsum(14)]),
            })
            .collect(),
        include_writing_spaces: true,
    }
}

fn any_page_contains(document: &Document, needle: &str) -> bool {
    document.pages().any(|page| page.contains_text(needle))
}

fn has_span(document: &Document, text: &str) -> bool {
    document
        .pages()
        .any(|page| page.spans().any(|span| span.text == text))
}

#[test]
fn progress_report_headline_stats() {
    let document = engine().progress_report(&report()).layout();
    for text in [
        "12",
        "Day Streak",
        "5",
        "Activities Completed",
        "340",
        "Points Earned",
    ] {
        assert!(has_span(&document, text), "missing {text:?}");
    }
    assert!(has_span(&document, "Mar 1, 2026 \u{2013} Mar 31, 2026"));
    assert!(any_page_contains(&document, "Meditation: 5"));
}

#[test]
fn activities_completed_is_the_sum_of_all_counts() {
    let mut payload = report();
    payload.activity_counts = Some(vec![
        ActivityCount {
            name: "Meditation".to_string(),
            count: 5,
        },
        ActivityCount {
            name: "Journaling".to_string(),
            count: 8,
        },
    ]);
    let document = engine().progress_report(&payload).layout();
    assert!(has_span(&document, "13"));
}

#[test]
fn empty_groups_are_omitted() {
    let mut payload = report();
    payload.activity_counts = Some(vec![]);
    payload.mood_series = Some(vec![]);
    payload.achievements = Some(vec![]);
    payload.recommendations = None;

    let document = engine().progress_report(&payload).layout();
    for heading in [
        "Mood Trends",
        "Activity Breakdown",
        "Achievements",
        "Recommendations",
    ] {
        assert!(!any_page_contains(&document, heading), "{heading} shown");
    }
    // the closing callout is always there
    assert!(has_span(&document, "Keep Going"));
    assert!(has_span(&document, "0"));
}

#[test]
fn present_groups_are_shown() {
    let mut payload = report();
    payload.mood_series = Some(vec![
        MoodEntry {
            date: date(2),
            score: 4.0,
            label: "Calm".to_string(),
        },
        MoodEntry {
            date: date(3),
            score: 2.0,
            label: "Tired".to_string(),
        },
    ]);
    payload.achievements = Some(vec!["First week complete".to_string()]);
    payload.recommendations = Some(vec!["Keep walking".to_string()]);

    let document = engine().progress_report(&payload).layout();
    assert!(has_span(&document, "Mood Trends"));
    assert!(has_span(&document, "Average mood score: 3.0"));
    assert!(has_span(&document, "Best day: Mar 2, 2026 (Calm, 4.0)"));
    assert!(has_span(&document, "Achievements"));
    assert!(any_page_contains(&document, "First week complete"));
    assert!(has_span(&document, "Recommendations"));
}

#[test]
fn long_reports_are_footered_on_every_page() {
    let mut payload = report();
    payload.recommendations = Some((0..40).map(|_| lipsum::lipsum(30)).collect());

    let mut document = engine().progress_report(&payload).layout();
    let page_count = document.page_count();
    assert!(page_count > 1);

    stamp_footers(&mut document);
    for page in document.pages() {
        let footer = format!("\u{a9} 2026 Wellspring \u{2022} Page {} of {page_count}", page.index);
        assert!(has_span_on(page.spans(), &footer), "page {} footer", page.index);
    }
}

fn has_span_on<'a>(mut spans: impl Iterator<Item = &'a SpanLayout>, text: &str) -> bool {
    spans.any(|span| span.text == text)
}

#[test]
fn certificate_is_a_single_fixed_page_without_a_footer() {
    let engine = engine();
    let template = engine.certificate(&certificate(&lipsum::lipsum(30)));
    assert_eq!(template.mode, LayoutMode::FixedAbsolute);
    assert!(template.footer.is_none());

    let document = template.layout();
    assert_eq!(document.page_count(), 1);
    assert!(!any_page_contains(&document, "Page 1 of"));
    assert!(has_span(&document, "Certificate of Completion"));
    assert!(has_span(&document, "Avery Quinn"));
    assert!(has_span(&document, "Completed on March 5, 2026"));
}

#[test]
fn leaving_out_the_description_moves_nothing_else() {
    let engine = engine();
    let description = "Thirty mornings of breathing exercises and journaling.";
    let with = engine.certificate(&certificate(description)).layout();
    let without = engine.certificate(&certificate("   ")).layout();

    let with = with.page(1).unwrap();
    let without = without.page(1).unwrap();

    assert!(with.contains_text(description));
    assert!(!without.contains_text(description));

    let remaining: Vec<_> = with
        .spans()
        .filter(|span| span.text != description)
        .collect();
    let spans: Vec<_> = without.spans().collect();
    assert_eq!(remaining, spans);
    assert_eq!(with.contents.len(), without.contents.len() + 1);
}

#[test]
fn guide_topics_are_numbered_and_bookmarked() {
    let payload = guide(4);
    let document = engine().resource_guide(&payload).layout();
    assert!(document.page_count() > 1);

    let entries = &document.outline.entries;
    assert_eq!(entries.len(), 4);
    for (i, entry) in entries.iter().enumerate() {
        let heading = format!("{}. Topic {}", i + 1, i + 1);
        assert_eq!(entry.title, heading);
        let page = document.page(entry.page_index + 1).unwrap();
        assert!(page.spans().any(|span| span.text == heading));
    }

    assert!(has_span(&document, "Key Tips"));
    assert!(has_span(&document, "Your Reflections"));
    assert!(has_span(&document, "Need More Support?"));
}

#[test]
fn guide_writing_spaces_are_optional() {
    let mut payload = guide(2);
    payload.include_writing_spaces = false;
    payload.sections[0].tips = None;
    payload.sections[1].tips = Some(vec![]);

    let document = engine().resource_guide(&payload).layout();
    assert!(!any_page_contains(&document, "Your Reflections"));
    assert!(!any_page_contains(&document, "Key Tips"));
}

#[test]
fn sealed_documents_are_pdfs() {
    let mut options = RenderOptions::new();
    options.footer_year(2026).compress(false);
    let engine = Engine::new(options);

    let sealed = engine.render_resource_guide(&guide(3)).unwrap();
    assert!(sealed.bytes().starts_with(b"%PDF-"));
    assert_eq!(sealed.filename(), "coping-with-stress.pdf");

    let page_count = sealed.page_count();
    let footer = format!("Page {page_count} of {page_count}");
    assert!(sealed
        .bytes()
        .windows(footer.len())
        .any(|window| window == footer.as_bytes()));
}

#[test]
fn entry_points_use_default_options() {
    let certificate = pdf_compose::render_certificate(&certificate("")).unwrap();
    assert_eq!(certificate.page_count(), 1);
    assert_eq!(certificate.filename(), "certificate-avery-quinn.pdf");

    let report = pdf_compose::render_progress_report(&report()).unwrap();
    assert!(report.bytes().starts_with(b"%PDF-"));
    assert_eq!(report.filename(), "progress-report-sam-rivera-2026-03-01.pdf");

    let guide = pdf_compose::render_resource_guide(&guide(1)).unwrap();
    assert!(guide.page_count() >= 1);
}

#[test]
fn names_without_latin_letters_still_get_a_filename() {
    let engine = engine();

    let mut payload = certificate("");
    payload.recipient_name = "\u{674e}\u{660e}".to_string();
    assert_eq!(engine.certificate(&payload).filename, "certificate.pdf");

    let mut payload = guide(1);
    payload.title = "\u{5fc3}\u{7406}\u{30ac}\u{30a4}\u{30c9}".to_string();
    assert_eq!(engine.resource_guide(&payload).filename, "resource-guide.pdf");

    let mut payload = report();
    payload.subject_name = "\u{674e}\u{660e}".to_string();
    assert_eq!(
        engine.progress_report(&payload).filename,
        "progress-report-2026-03-01.pdf"
    );
}

#[test]
fn delivery_saves_into_a_directory() {
    let dir = std::env::temp_dir().join(format!("pdf-compose-delivery-{}", std::process::id()));
    let sealed = engine().render_certificate(&certificate("")).unwrap();

    let delivery = DirectoryDelivery::new(&dir);
    delivery.deliver(&sealed).unwrap();

    let path = delivery.path_for(&sealed);
    assert_eq!(path, dir.join("certificate-avery-quinn.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), sealed.bytes());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn payloads_deserialize_from_camel_case_json() {
    let report: ProgressReportPayload = serde_json::from_str(
        r#"{
            "subjectName": "Sam Rivera",
            "dateRange": { "start": "2026-03-01", "end": "2026-03-31" },
            "moodSeries": [{ "date": "2026-03-02", "score": 4.0, "label": "Calm" }],
            "activityCounts": [{ "name": "Meditation", "count": 5 }],
            "streakDays": 12,
            "totalPoints": 340,
            "achievements": ["First week complete"]
        }"#,
    )
    .unwrap();
    assert_eq!(report.date_range.end, date(31));
    assert_eq!(report.activities_completed(), 5);
    assert_eq!(report.recommendations, None);

    let certificate: CertificatePayload = serde_json::from_str(
        r#"{
            "recipientName": "Avery Quinn",
            "achievementTitle": "Mindful Mornings",
            "achievementDescription": "",
            "completionDate": "2026-03-05"
        }"#,
    )
    .unwrap();
    assert_eq!(certificate.completion_date, date(5));

    let guide: ResourceGuidePayload = serde_json::from_str(
        r#"{
            "title": "Coping with Stress",
            "description": "Practical ideas.",
            "sections": [{ "title": "Breathing", "body": "Slowly.", "tips": ["Count to four"] }],
            "includeWritingSpaces": true
        }"#,
    )
    .unwrap();
    assert!(guide.include_writing_spaces);
    assert_eq!(guide.sections[0].tips.as_deref(), Some(&["Count to four".to_string()][..]));
}

#[test]
fn engines_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();

    let engine = std::sync::Arc::new(engine());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.render_progress_report(&report()).unwrap())
        })
        .collect();
    let sealed: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(sealed.iter().all(|s| s.page_count() == sealed[0].page_count()));
}
