use pdf_compose::{GuideSection, ResourceGuidePayload};

fn main() {
    let sections = ["Understanding Stress", "Breathing Techniques", "Building Routines"]
        .iter()
        .map(|title| GuideSection {
            title: title.to_string(),
            body: lipsum::lipsum(220),
            tips: Some(vec![lipsum::lipsum(12), lipsum::lipsum(18), lipsum::lipsum(9)]),
        })
        .collect();

    let payload = ResourceGuidePayload {
        title: "Coping with Stress".to_string(),
        description: lipsum::lipsum(60),
        sections,
        include_writing_spaces: true,
    };

    let sealed = pdf_compose::render_resource_guide(&payload).unwrap();
    println!("{} pages", sealed.page_count());

    let out = std::fs::File::create(sealed.filename()).unwrap();
    sealed.write_to(out).unwrap();
}
