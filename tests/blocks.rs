use pdf_compose::layout::{width_of_text, Align, LayoutMode, LayoutState, Margins, PageGeometry};
use pdf_compose::{
    pagesize, ContentBlock, Document, DocumentTemplate, In, PageContents, Pt, Stat, TextRole,
    Theme, PANEL_PADDING,
};

fn letter() -> PageGeometry {
    PageGeometry::new(pagesize::LETTER, Margins::all(In(1.0)))
}

fn layout(blocks: Vec<ContentBlock>) -> Document {
    let mut template = DocumentTemplate::flowing("blocks", letter(), Theme::default());
    for block in blocks {
        template.push(block);
    }
    template.layout()
}

/// 1-based indices of the pages containing `needle`
fn pages_with(document: &Document, needle: &str) -> Vec<usize> {
    document
        .pages()
        .filter(|page| page.contains_text(needle))
        .map(|page| page.index)
        .collect()
}

#[test]
fn long_section_continues_on_the_next_page() {
    let body = (1..=40)
        .map(|i| format!("line {i:02}"))
        .collect::<Vec<_>>()
        .join("\n");

    // leaves room for the heading and 35 body lines on the first page
    let document = layout(vec![
        ContentBlock::Spacer(Pt(125.0)),
        ContentBlock::section("Overflowing", body),
    ]);

    assert_eq!(document.page_count(), 2);
    assert_eq!(pages_with(&document, "Overflowing"), vec![1]);
    assert_eq!(pages_with(&document, "line 01"), vec![1]);
    assert_eq!(pages_with(&document, "line 35"), vec![1]);
    assert_eq!(pages_with(&document, "line 36"), vec![2]);
    assert_eq!(pages_with(&document, "line 40"), vec![2]);
}

#[test]
fn heading_is_never_left_alone_at_the_bottom_of_a_page() {
    // room for the heading but not for a line of body under it
    let document = layout(vec![
        ContentBlock::Spacer(Pt(648.0 - 25.0)),
        ContentBlock::section("Stranded", lipsum::lipsum(40)),
    ]);

    assert_eq!(document.page_count(), 2);
    assert_eq!(pages_with(&document, "Stranded"), vec![2]);
}

#[test]
fn bullet_items_never_split_across_pages() {
    // every word of an item carries the item's token, so each wrapped line
    // of an item can be traced back to it
    let items: Vec<String> = (0..30)
        .map(|i| vec![format!("w{i:03}x"); 25].join(" "))
        .collect();

    let document = layout(vec![
        ContentBlock::Spacer(Pt(300.0)),
        ContentBlock::bullets(Some("Items"), items.clone()),
    ]);
    assert!(document.page_count() > 1);

    for i in 0..items.len() {
        let token = format!("w{i:03}x");
        let pages = pages_with(&document, &token);
        assert_eq!(pages.len(), 1, "{token} was split over pages {pages:?}");
    }
}

#[test]
fn bullet_list_heading_travels_with_its_first_item() {
    let item = vec!["lorem"; 30].join(" ");
    let document = layout(vec![
        ContentBlock::Spacer(Pt(648.0 - 30.0)),
        ContentBlock::bullets(Some("Tips"), vec![item]),
    ]);
    assert_eq!(pages_with(&document, "Tips"), vec![2]);
}

#[test]
fn stats_panel_shows_each_value_over_its_label() {
    let document = layout(vec![ContentBlock::StatsPanel {
        stats: vec![
            Stat::new(12, "Day Streak"),
            Stat::new(5, "Activities Completed"),
            Stat::new(340, "Points Earned"),
        ],
    }]);
    let page = document.page(1).unwrap();

    let span = |text: &str| {
        page.spans()
            .find(|span| span.text == text)
            .unwrap_or_else(|| panic!("no span {text:?}"))
            .coords
    };

    let mut previous_x = Pt(0.0);
    for (value, label) in [
        ("12", "Day Streak"),
        ("5", "Activities Completed"),
        ("340", "Points Earned"),
    ] {
        let (value_x, value_y) = span(value);
        let (label_x, label_y) = span(label);
        assert!(value_y > label_y, "{value} should sit above {label}");
        assert!(value_x > previous_x && label_x > previous_x);
        previous_x = value_x.max(label_x);
    }

    let backgrounds = page
        .contents
        .iter()
        .filter(|c| matches!(c, PageContents::Rect(_)))
        .count();
    assert_eq!(backgrounds, 1);
}

#[test]
#[should_panic(expected = "2 to 4 stats")]
fn stats_panel_needs_at_least_two_stats() {
    layout(vec![ContentBlock::StatsPanel {
        stats: vec![Stat::new(1, "Lonely")],
    }]);
}

#[test]
#[should_panic(expected = "2 to 4 stats")]
fn stats_panel_takes_at_most_four_stats() {
    let stats = (0..5).map(|i| Stat::new(i, "Stat")).collect();
    layout(vec![ContentBlock::StatsPanel { stats }]);
}

#[test]
#[should_panic(expected = "fixed page")]
fn decorative_frame_needs_a_fixed_layout() {
    layout(vec![ContentBlock::DecorativeFrame]);
}

#[test]
fn writing_space_draws_one_rule_per_line() {
    let document = layout(vec![ContentBlock::WritingSpace {
        label: "Your Reflections".to_string(),
        lines: 5,
    }]);
    let page = document.page(1).unwrap();
    assert!(page.contains_text("Your Reflections"));
    let rules = page
        .contents
        .iter()
        .filter(|c| matches!(c, PageContents::Line(_)))
        .count();
    assert_eq!(rules, 5);
}

#[test]
fn blocks_leave_the_style_stack_balanced() {
    let mut state = LayoutState::new(letter(), LayoutMode::Flowing, Theme::default());
    let blocks = vec![
        ContentBlock::BrandHeader { compact: false },
        ContentBlock::Title {
            title: "Title".to_string(),
            subtitle: Some("Subtitle".to_string()),
        },
        ContentBlock::section("Heading", lipsum::lipsum(80)),
        ContentBlock::bullets(Some("List"), vec!["one".to_string(), "two".to_string()]),
        ContentBlock::Callout {
            heading: "Callout".to_string(),
            body: lipsum::lipsum(30),
        },
        ContentBlock::SignatureLine {
            caption: "Signed".to_string(),
        },
    ];
    for block in blocks.iter() {
        block.render(&mut state);
        assert_eq!(state.style.depth(), 0);
        assert_eq!(state.style.current(), Theme::default().body());
    }
}

#[test]
fn required_height_is_exactly_what_rendering_uses() {
    let blocks = vec![
        ContentBlock::BrandHeader { compact: false },
        ContentBlock::BrandHeader { compact: true },
        ContentBlock::Title {
            title: "Title".to_string(),
            subtitle: Some("Subtitle".to_string()),
        },
        ContentBlock::text(lipsum::lipsum(40)),
        ContentBlock::line("Centered", TextRole::Caption, Align::Center),
        ContentBlock::text("   "),
        ContentBlock::section("Heading", lipsum::lipsum(80)),
        ContentBlock::Section {
            heading: None,
            body: lipsum::lipsum(30),
            bookmark: false,
        },
        ContentBlock::bullets(Some("List"), vec![lipsum::lipsum(30), "two".to_string()]),
        ContentBlock::bullets(None::<String>, vec!["one".to_string()]),
        ContentBlock::bullets(Some("Nothing"), vec![]),
        ContentBlock::StatsPanel {
            stats: vec![Stat::new(1, "a"), Stat::new(2, "b")],
        },
        ContentBlock::WritingSpace {
            label: "Notes".to_string(),
            lines: 3,
        },
        ContentBlock::Callout {
            heading: "Callout".to_string(),
            body: lipsum::lipsum(30),
        },
        ContentBlock::SignatureLine {
            caption: "Signed".to_string(),
        },
        ContentBlock::Spacer(Pt(40.0)),
    ];

    for block in blocks {
        let mut state = LayoutState::new(letter(), LayoutMode::Flowing, Theme::default());
        let expected = block.required_height(&state);
        let start = state.y();
        block.render(&mut state);
        let used = state.y() - start;
        assert_eq!(state.document().page_count(), 1);
        assert!(
            (*used - *expected).abs() < 1e-3,
            "{block:?} used {used:?}, expected {expected:?}"
        );
    }
}

#[test]
fn long_headings_wrap_inside_the_margins() {
    let heading = vec!["heading"; 30].join(" ");
    let block = ContentBlock::section(&heading, "after");

    let mut state = LayoutState::new(letter(), LayoutMode::Flowing, Theme::default());
    let expected = block.required_height(&state);
    block.render(&mut state);
    assert!((*state.y() - (72.0 + *expected)).abs() < 1e-3);

    let document = state.into_document();
    let page = document.page(1).unwrap();
    let style = Theme::default().heading();
    let heading_spans: Vec<_> = page
        .spans()
        .filter(|span| span.text.starts_with("heading"))
        .collect();
    assert!(heading_spans.len() > 1);
    for span in heading_spans.iter() {
        let (x, _) = span.coords;
        assert!(x + width_of_text(&span.text, &style) <= Pt(540.0) + Pt(1e-3));
    }

    let (_, body_y) = page.spans().find(|span| span.text == "after").unwrap().coords;
    assert!(heading_spans.iter().all(|span| span.coords.1 > body_y));
}

#[test]
fn long_callout_headings_wrap_inside_the_panel() {
    let heading = vec!["heading"; 30].join(" ");
    let document = layout(vec![ContentBlock::Callout {
        heading: heading.clone(),
        body: "after".to_string(),
    }]);
    let page = document.page(1).unwrap();
    let style = Theme::default().heading();

    let heading_spans: Vec<_> = page
        .spans()
        .filter(|span| span.text.starts_with("heading"))
        .collect();
    assert!(heading_spans.len() > 1);
    for span in heading_spans.iter() {
        let (x, _) = span.coords;
        assert!(x + width_of_text(&span.text, &style) <= Pt(540.0) - PANEL_PADDING + Pt(1e-3));
    }

    let (_, body_y) = page.spans().find(|span| span.text == "after").unwrap().coords;
    assert!(heading_spans.iter().all(|span| span.coords.1 > body_y));

    // the panel is tall enough to hold every heading line and the body
    let panel_bottom = page
        .contents
        .iter()
        .find_map(|c| match c {
            PageContents::Rect(rect) => Some(rect.rect.y1),
            _ => None,
        })
        .unwrap();
    assert!(panel_bottom < body_y);
}

#[test]
fn bookmarked_sections_land_in_the_outline() {
    let document = layout(vec![
        ContentBlock::Spacer(Pt(640.0)),
        ContentBlock::Section {
            heading: Some("Bookmarked".to_string()),
            body: lipsum::lipsum(20),
            bookmark: true,
        },
    ]);
    let entries = &document.outline.entries;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Bookmarked");
    assert_eq!(entries[0].page_index, 1);
    // the heading is at the top margin of page 2
    assert!((*entries[0].top - (792.0 - 72.0)).abs() < 1e-3);
}
