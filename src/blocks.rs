//! The catalog of content blocks templates are composed from.
//!
//! Every block follows the same protocol when rendered: work out how much
//! vertical space it needs, [reserve](LayoutState::reserve) that space (which
//! may start a new page), then draw its primitives at the origin the
//! reservation returned, then leave a gap below without starting a new page
//! for it. Blocks that draw in a different style push it on
//! the [StyleContext](crate::StyleContext) and pop it once done, so the body
//! style is always back in effect for the next block.

use crate::layout::{aligned_x, wrap, wrapped_height, Align, LayoutMode, LayoutState, WriteOrigin};
use crate::page::RectLayout;
use crate::style::Style;
use crate::units::Pt;

/// Space left below most blocks
pub const BLOCK_GAP: Pt = Pt(14.0);
/// Space between a heading and the text under it
pub const HEADING_GAP: Pt = Pt(4.0);
/// Space between bullet list items
pub const ITEM_GAP: Pt = Pt(3.0);
/// Indent of bullet list items from the left margin
pub const BULLET_INDENT: Pt = Pt(12.0);
/// Distance between ruled lines in a writing space
pub const RULE_SPACING: Pt = Pt(24.0);
/// Inner padding of stat panels and callouts
pub const PANEL_PADDING: Pt = Pt(12.0);
/// Width of the accent bar down the left side of a callout
pub const CALLOUT_BAR: Pt = Pt(4.0);
/// Length of the rule above a signature caption
pub const SIGNATURE_WIDTH: Pt = Pt(220.0);

const BULLET: &str = "\u{2022} ";

/// One value/label pair in a [ContentBlock::StatsPanel]
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new<V: ToString, L: ToString>(value: V, label: L) -> Stat {
        Stat {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Which theme style a [ContentBlock::TextLine] is drawn in
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextRole {
    Body,
    Caption,
    Subtitle,
    /// Large bold text, e.g. the recipient of a certificate
    Name,
    /// Accent-coloured bold text
    Emphasis,
}

/// One semantic unit of content
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// The brand name and tagline. The full header is left aligned and
    /// underlined by a rule; the compact one is centered without a rule.
    BrandHeader { compact: bool },
    /// A centered title with an optional subtitle
    Title {
        title: String,
        subtitle: Option<String>,
    },
    /// Free-standing text in one of the theme roles, wrapped inside the
    /// content area shrunk by `inset` on both sides
    TextLine {
        text: String,
        role: TextRole,
        align: Align,
        inset: Pt,
    },
    /// An optional heading over body text. The body may continue across a
    /// page break line by line; the heading always stays with the first
    /// line. When `bookmark` is set the heading is added to the outline.
    Section {
        heading: Option<String>,
        body: String,
        bookmark: bool,
    },
    /// An optional heading over bulleted items. Each item is kept whole on
    /// one page.
    BulletList {
        heading: Option<String>,
        items: Vec<String>,
    },
    /// Two to four big numbers with labels, in equal columns
    StatsPanel { stats: Vec<Stat> },
    /// A label followed by ruled lines to write on
    WritingSpace { label: String, lines: usize },
    /// A heading and body on a tinted panel
    Callout { heading: String, body: String },
    /// Nested borders around the whole page. Fixed-absolute layouts only.
    DecorativeFrame,
    /// A centered rule with a caption underneath
    SignatureLine { caption: String },
    /// Empty vertical space
    Spacer(Pt),
}

impl ContentBlock {
    /// A left-aligned body text line
    pub fn text<S: ToString>(text: S) -> ContentBlock {
        ContentBlock::line(text, TextRole::Body, Align::Left)
    }

    pub fn line<S: ToString>(text: S, role: TextRole, align: Align) -> ContentBlock {
        ContentBlock::TextLine {
            text: text.to_string(),
            role,
            align,
            inset: Pt(0.0),
        }
    }

    pub fn section<H: ToString, B: ToString>(heading: H, body: B) -> ContentBlock {
        ContentBlock::Section {
            heading: Some(heading.to_string()),
            body: body.to_string(),
            bookmark: false,
        }
    }

    pub fn bullets<H: ToString>(heading: Option<H>, items: Vec<String>) -> ContentBlock {
        ContentBlock::BulletList {
            heading: heading.map(|h| h.to_string()),
            items,
        }
    }

    /// How much vertical space the block takes up when rendered into
    /// `state`, including the gap it leaves below itself. Rendering a block
    /// away from a page break advances the cursor by exactly this much.
    pub fn required_height(&self, state: &LayoutState) -> Pt {
        self.content_height(state) + self.trailing_gap(state.mode())
    }

    /// The gap left below the block, which separates it from the next one
    pub fn trailing_gap(&self, mode: LayoutMode) -> Pt {
        let flowing = mode == LayoutMode::Flowing;
        match self {
            ContentBlock::BrandHeader { compact: false }
            | ContentBlock::Section { .. }
            | ContentBlock::StatsPanel { .. }
            | ContentBlock::WritingSpace { .. }
            | ContentBlock::Callout { .. } => BLOCK_GAP,
            // the last item already left an item gap behind it
            ContentBlock::BulletList { items, .. } if !items.is_empty() => BLOCK_GAP - ITEM_GAP,
            ContentBlock::Title { .. } if flowing => BLOCK_GAP,
            ContentBlock::TextLine { text, .. } if flowing && !text.trim().is_empty() => {
                HEADING_GAP
            }
            _ => Pt(0.0),
        }
    }

    /// Height of what the block draws, without its trailing gap
    fn content_height(&self, state: &LayoutState) -> Pt {
        let theme = state.theme();
        let width = state.geometry().content_width();
        let body = state.style.current();

        match self {
            ContentBlock::BrandHeader { compact: true } => {
                theme.heading().line_height() + theme.caption().line_height()
            }
            ContentBlock::BrandHeader { compact: false } => {
                theme.brand().line_height() + theme.caption().line_height() + HEADING_GAP * 2.0
            }
            ContentBlock::Title { title, subtitle } => {
                let title_height = wrapped_height(title, width, &theme.title());
                let subtitle_height = subtitle
                    .as_deref()
                    .map(|s| wrapped_height(s, width, &theme.subtitle()))
                    .unwrap_or_default();
                title_height + subtitle_height
            }
            ContentBlock::TextLine {
                text, role, inset, ..
            } => wrapped_height(text, width - *inset * 2.0, &role_style(state, *role)),
            ContentBlock::Section { heading, body: text, .. } => {
                heading_height(state, heading.as_deref(), width) + wrapped_height(text, width, &body)
            }
            ContentBlock::BulletList { items, .. } if items.is_empty() => Pt(0.0),
            ContentBlock::BulletList { heading, items } => {
                let items_height: Pt = items
                    .iter()
                    .map(|item| bullet_item_height(item, width, &body) + ITEM_GAP)
                    .sum();
                heading_height(state, heading.as_deref(), width) + items_height
            }
            ContentBlock::StatsPanel { .. } => stats_panel_height(state),
            ContentBlock::WritingSpace { lines, .. } => {
                theme.body().bold().line_height() + RULE_SPACING * (*lines as f32)
            }
            ContentBlock::Callout { heading, body: text } => {
                let inner = callout_inner_width(width);
                PANEL_PADDING * 2.0
                    + heading_height(state, Some(heading), inner)
                    + wrapped_height(text, inner, &body)
            }
            ContentBlock::DecorativeFrame => Pt(0.0),
            ContentBlock::SignatureLine { .. } => HEADING_GAP + theme.caption().line_height(),
            ContentBlock::Spacer(height) => *height,
        }
    }

    /// Lay the block out at the cursor, reserving space as it goes
    pub fn render(&self, state: &mut LayoutState) {
        let gap = self.trailing_gap(state.mode());
        match self {
            ContentBlock::BrandHeader { compact } => render_brand_header(state, self, *compact),
            ContentBlock::Title { title, subtitle } => {
                render_title(state, self, title, subtitle.as_deref())
            }
            ContentBlock::TextLine {
                text,
                role,
                align,
                inset,
            } => render_text_line(state, text, *role, *align, *inset),
            ContentBlock::Section {
                heading,
                body,
                bookmark,
            } => render_section(state, heading.as_deref(), body, *bookmark),
            ContentBlock::BulletList { heading, items } => {
                render_bullet_list(state, heading.as_deref(), items)
            }
            ContentBlock::StatsPanel { stats } => render_stats_panel(state, stats),
            ContentBlock::WritingSpace { label, lines } => {
                render_writing_space(state, label, *lines)
            }
            ContentBlock::Callout { heading, body } => render_callout(state, self, heading, body),
            ContentBlock::DecorativeFrame => render_decorative_frame(state),
            ContentBlock::SignatureLine { caption } => render_signature_line(state, self, caption),
            ContentBlock::Spacer(height) => {
                state.reserve(*height);
            }
        }
        // never starts a page: a gap at the bottom of one page isn't carried
        // over to the top of the next
        state.skip(gap);
    }
}

/// A heading wrapped to `width` in the theme's heading style
fn heading_lines(state: &LayoutState, heading: &str, width: Pt) -> Vec<String> {
    wrap(heading, width, &state.theme().heading())
}

fn heading_height(state: &LayoutState, heading: Option<&str>, width: Pt) -> Pt {
    match heading {
        Some(heading) => {
            wrapped_height(heading, width, &state.theme().heading()) + HEADING_GAP
        }
        None => Pt(0.0),
    }
}

fn bullet_item_height(item: &str, width: Pt, style: &Style) -> Pt {
    wrapped_height(&format!("{BULLET}{item}"), width - BULLET_INDENT, style)
}

fn stats_panel_height(state: &LayoutState) -> Pt {
    let theme = state.theme();
    PANEL_PADDING * 2.0 + theme.stat_value().line_height() + theme.stat_label().line_height()
}

fn callout_inner_width(width: Pt) -> Pt {
    width - PANEL_PADDING * 2.0 - CALLOUT_BAR
}

fn role_style(state: &LayoutState, role: TextRole) -> Style {
    let theme = state.theme();
    match role {
        TextRole::Body => theme.body(),
        TextRole::Caption => theme.caption(),
        TextRole::Subtitle => theme.subtitle(),
        TextRole::Name => theme
            .title()
            .with_size(theme.title_size * 1.25)
            .with_colour(theme.text),
        TextRole::Emphasis => theme.heading(),
    }
}

/// Draw `lines` one below the other starting at `top`
fn draw_lines(state: &mut LayoutState, lines: &[String], left: Pt, width: Pt, top: Pt, align: Align) {
    let style = state.style.current();
    let mut y = top;
    for line in lines {
        let x = aligned_x(line, &style, left, width, align);
        state.draw_text(line, x, y, &style);
        y += style.line_height();
    }
}

/// Draw `lines` in `style`, restoring the previous style afterwards
fn draw_styled(
    state: &mut LayoutState,
    style: Style,
    lines: &[String],
    left: Pt,
    width: Pt,
    top: Pt,
    align: Align,
) {
    state.style.push(style);
    draw_lines(state, lines, left, width, top, align);
    state.style.pop();
}

fn render_brand_header(state: &mut LayoutState, block: &ContentBlock, compact: bool) {
    let height = block.content_height(state);
    let origin = state.reserve(height);
    let width = state.geometry().content_width();
    let theme = state.theme().clone();

    let (name_style, align) = if compact {
        (theme.heading().with_colour(theme.primary), Align::Center)
    } else {
        (theme.brand(), Align::Left)
    };

    let name = [theme.brand_name.clone()];
    draw_styled(state, name_style, &name, origin.x, width, origin.y, align);

    let tagline_top = origin.y + name_style.line_height();
    let tagline = [theme.tagline.clone()];
    draw_styled(state, theme.caption(), &tagline, origin.x, width, tagline_top, align);

    if !compact {
        let rule_y = tagline_top + theme.caption().line_height() + HEADING_GAP;
        state.draw_rule(origin.x, origin.x + width, rule_y, Pt(1.5), theme.primary);
    }
}

fn render_title(state: &mut LayoutState, block: &ContentBlock, title: &str, subtitle: Option<&str>) {
    let width = state.geometry().content_width();
    let title_style = state.theme().title();
    let subtitle_style = state.theme().subtitle();

    let height = block.content_height(state);
    let origin = state.reserve(height);

    let title_lines = wrap(title, width, &title_style);
    draw_styled(state, title_style, &title_lines, origin.x, width, origin.y, Align::Center);

    if let Some(subtitle) = subtitle {
        let top = origin.y + title_style.line_height() * title_lines.len() as f32;
        let lines = wrap(subtitle, width, &subtitle_style);
        draw_styled(state, subtitle_style, &lines, origin.x, width, top, Align::Center);
    }
}

fn render_text_line(state: &mut LayoutState, text: &str, role: TextRole, align: Align, inset: Pt) {
    let style = role_style(state, role);
    let left = state.geometry().content_left() + inset;
    let width = state.geometry().content_width() - inset * 2.0;
    let lines = wrap(text, width, &style);
    if lines.is_empty() {
        return;
    }

    let origin = state.reserve(style.line_height() * lines.len() as f32);
    draw_styled(state, style, &lines, left, width, origin.y, align);
}

/// Reserves the heading together with `first_line_height` of whatever comes
/// under it and draws the heading. Returns where the heading starts and the
/// y that content starts at.
fn reserve_heading(
    state: &mut LayoutState,
    heading: Option<&str>,
    first_line_height: Pt,
) -> (WriteOrigin, Pt) {
    let width = state.geometry().content_width();
    let height = heading_height(state, heading, width);
    let origin = state.reserve(height + first_line_height);
    if let Some(heading) = heading {
        let lines = heading_lines(state, heading, width);
        let heading_style = state.theme().heading();
        draw_styled(state, heading_style, &lines, origin.x, width, origin.y, Align::Left);
    }
    (origin, origin.y + height)
}

fn render_section(state: &mut LayoutState, heading: Option<&str>, body: &str, bookmark: bool) {
    let style = state.style.current();
    let width = state.geometry().content_width();
    let lines = wrap(body, width, &style);
    let line_height = style.line_height();

    let first_height = if lines.is_empty() { Pt(0.0) } else { line_height };
    let (origin, body_top) = reserve_heading(state, heading, first_height);

    if let (Some(heading), true) = (heading, bookmark) {
        let top = state.geometry().to_pdf_y(origin.y);
        state.document_mut().add_bookmark(heading, origin.page, top);
    }

    for (i, line) in lines.iter().enumerate() {
        let top = if i == 0 {
            body_top
        } else {
            state.reserve(line_height).y
        };
        state.draw_text(line, origin.x, top, &style);
    }
}

fn render_bullet_list(state: &mut LayoutState, heading: Option<&str>, items: &[String]) {
    let style = state.style.current();
    let width = state.geometry().content_width();
    let left = state.geometry().content_left() + BULLET_INDENT;
    let item_width = width - BULLET_INDENT;

    let wrapped: Vec<Vec<String>> = items
        .iter()
        .map(|item| wrap(&format!("{BULLET}{item}"), item_width, &style))
        .collect();
    let item_height = |lines: &Vec<String>| style.line_height() * lines.len() as f32;

    let mut pending_heading = heading;
    for lines in wrapped.iter() {
        // every item is reserved whole so it can never straddle a page break;
        // the heading rides along with the first item
        let top = match pending_heading.take() {
            Some(heading) => reserve_heading(state, Some(heading), item_height(lines)).1,
            None => state.reserve(item_height(lines)).y,
        };
        draw_lines(state, lines, left, item_width, top, Align::Left);
        state.skip(ITEM_GAP);
    }
}

fn render_stats_panel(state: &mut LayoutState, stats: &[Stat]) {
    assert!(
        (2..=4).contains(&stats.len()),
        "a stats panel shows 2 to 4 stats, got {}",
        stats.len()
    );

    let theme = state.theme().clone();
    let height = stats_panel_height(state);
    let width = state.geometry().content_width();
    let origin = state.reserve(height);

    state.draw_rect(
        origin.x,
        origin.y,
        width,
        height,
        Some(theme.primary.tint(0.88)),
        None,
    );

    let column = width * (1.0 / stats.len() as f32);
    let value_style = theme.stat_value();
    let label_style = theme.stat_label();
    let value_top = origin.y + PANEL_PADDING;
    let label_top = value_top + value_style.line_height();

    for (i, stat) in stats.iter().enumerate() {
        let left = origin.x + column * i as f32;
        let value = [stat.value.clone()];
        draw_styled(state, value_style, &value, left, column, value_top, Align::Center);
        let label = [stat.label.clone()];
        draw_styled(state, label_style, &label, left, column, label_top, Align::Center);
    }
}

fn render_writing_space(state: &mut LayoutState, label: &str, lines: usize) {
    let theme = state.theme().clone();
    let label_style = theme.body().bold();
    let width = state.geometry().content_width();
    let height = label_style.line_height() + RULE_SPACING * lines as f32;
    let origin = state.reserve(height);

    let label = [label.to_string()];
    draw_styled(state, label_style, &label, origin.x, width, origin.y, Align::Left);

    for i in 1..=lines {
        let y = origin.y + label_style.line_height() + RULE_SPACING * i as f32;
        state.draw_rule(origin.x, origin.x + width, y, Pt(0.5), theme.rule);
    }
}

fn render_callout(state: &mut LayoutState, block: &ContentBlock, heading: &str, body: &str) {
    let theme = state.theme().clone();
    let width = state.geometry().content_width();
    let inner_left = state.geometry().content_left() + CALLOUT_BAR + PANEL_PADDING;
    let inner_width = callout_inner_width(width);

    let height = block.content_height(state);
    let origin = state.reserve(height);

    state.draw_rect(
        origin.x,
        origin.y,
        width,
        height,
        Some(theme.accent.tint(0.9)),
        None,
    );
    state.draw_rect(origin.x, origin.y, CALLOUT_BAR, height, Some(theme.accent), None);

    let heading_top = origin.y + PANEL_PADDING;
    let heading = heading_lines(state, heading, inner_width);
    draw_styled(
        state,
        theme.heading(),
        &heading,
        inner_left,
        inner_width,
        heading_top,
        Align::Left,
    );

    let body_style = state.style.current();
    let lines = wrap(body, inner_width, &body_style);
    let body_top =
        heading_top + theme.heading().line_height() * heading.len() as f32 + HEADING_GAP;
    draw_lines(state, &lines, inner_left, inner_width, body_top, Align::Left);
}

fn render_decorative_frame(state: &mut LayoutState) {
    assert_eq!(
        state.mode(),
        LayoutMode::FixedAbsolute,
        "the decorative frame surrounds a single fixed page"
    );

    let theme = state.theme().clone();
    let page = state.geometry().page_rect();

    // drawn relative to the page edges: the frame ignores the cursor entirely
    for (inset, colour, thickness) in [
        (Pt(18.0), theme.primary, Pt(3.0)),
        (Pt(26.0), theme.accent, Pt(1.0)),
    ] {
        state.page_mut().add_rect(RectLayout {
            rect: page.inset(inset),
            fill: None,
            stroke: Some((colour, thickness)),
        });
    }
}

fn render_signature_line(state: &mut LayoutState, block: &ContentBlock, caption: &str) {
    let theme = state.theme().clone();
    let width = state.geometry().content_width();
    let height = block.content_height(state);
    let origin = state.reserve(height);

    let x1 = origin.x + (width - SIGNATURE_WIDTH) * 0.5;
    state.draw_rule(x1, x1 + SIGNATURE_WIDTH, origin.y, Pt(0.75), theme.text);

    let caption = [caption.to_string()];
    let top = origin.y + HEADING_GAP;
    draw_styled(state, theme.caption(), &caption, origin.x, width, top, Align::Center);
}
