use chrono::NaiveDate;
use pdf_compose::CertificatePayload;

fn main() {
    let payload = CertificatePayload {
        recipient_name: "Avery Quinn".to_string(),
        achievement_title: "the 30-Day Mindful Mornings Challenge".to_string(),
        achievement_description: "Thirty consecutive mornings of breathing exercises, \
            gratitude journaling and intention setting."
            .to_string(),
        completion_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
    };

    let sealed = pdf_compose::render_certificate(&payload).unwrap();

    // we're going to save the contents to a file on disk, but anywhere where we can write would do
    let out = std::fs::File::create(sealed.filename()).unwrap();
    sealed.write_to(out).unwrap();
}
