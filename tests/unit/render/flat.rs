use super::*;
use crate::script::model::SectionText;

fn script() -> Script {
    Script::from_sections([
        (
            SectionId::new(1).unwrap(),
            SectionText {
                subtitle: "Key term".to_string(),
                content: "Lead section body explaining the key term.".to_string(),
            },
        ),
        (
            SectionId::new(2).unwrap(),
            SectionText {
                subtitle: "Outlook".to_string(),
                content: "Second section body with the outlook.".to_string(),
            },
        ),
    ])
}

#[test]
fn base_illustration_is_square_and_deterministic() {
    let mut renderer = FlatBlockRenderer::default();
    let a = renderer.render_term_block(&script(), false, None).unwrap();
    let b = renderer.render_term_block(&script(), false, None).unwrap();

    assert_eq!(a.block.width(), ILLUSTRATION_SIZE);
    assert_eq!(a.block.height(), ILLUSTRATION_SIZE);
    assert_eq!(a.block.image().as_raw(), b.block.image().as_raw());
}

#[test]
fn refine_requires_the_prior_handle() {
    let mut renderer = FlatBlockRenderer::default();
    let err = renderer
        .render_term_block(&script(), true, None)
        .unwrap_err();
    assert!(matches!(err, InfographicError::Render(_)));
}

#[test]
fn refine_overlays_graph_on_the_same_base() {
    let mut renderer = FlatBlockRenderer::default();
    let base = renderer.render_term_block(&script(), false, None).unwrap();
    let top_left_before = *base.block.image().get_pixel(60, 60);

    let refined = renderer
        .render_term_block(&script(), true, Some(base))
        .unwrap();
    assert_eq!(refined.block.width(), ILLUSTRATION_SIZE);
    assert_eq!(refined.block.height(), ILLUSTRATION_SIZE);

    // base diagram untouched above the strip, graph strip repainted below
    assert_eq!(*refined.block.image().get_pixel(60, 60), top_left_before);
    let strip_y = ILLUSTRATION_SIZE - GRAPH_STRIP_HEIGHT / 2;
    assert_ne!(
        *refined.block.image().get_pixel(60, strip_y),
        top_left_before
    );
}

#[test]
fn text_block_height_tracks_content_length() {
    let mut renderer = FlatBlockRenderer::default();
    let section = SectionId::new(1).unwrap();
    let primary = Rgb8::new(30, 60, 90);
    let accent = Rgb8::new(220, 220, 210);

    let short = renderer
        .render_text_block(primary, accent, section, "Sub", "short")
        .unwrap();
    let long_content = "word ".repeat(120);
    let long = renderer
        .render_text_block(primary, accent, section, "Sub", &long_content)
        .unwrap();

    assert_eq!(short.width(), renderer.block_width);
    assert_eq!(short.height(), TEXT_BASE_HEIGHT + LINE_HEIGHT);
    assert!(long.height() > short.height());
}

#[test]
fn quote_block_needs_a_prominent_ranking() {
    let mut renderer = FlatBlockRenderer::default();
    let err = renderer
        .render_quote_block(&script(), &[], &[Rgb8::new(1, 1, 1)])
        .unwrap_err();
    assert!(matches!(err, InfographicError::Render(_)));
}

#[test]
fn quote_block_uses_backdrop_and_rule_colors() {
    let mut renderer = FlatBlockRenderer::default();
    let dominant = Rgb8::new(40, 80, 120);
    let backdrop = Rgb8::new(240, 238, 230);
    let block = renderer
        .render_quote_block(
            &script(),
            &[WeightedColor {
                color: dominant,
                weight: 9,
            }],
            &[backdrop],
        )
        .unwrap();

    assert_eq!(block.width(), renderer.block_width);
    // left rule in the dominant color, body in the backdrop
    assert_eq!(*block.image().get_pixel(4, 40), dominant.to_rgba());
    assert_eq!(*block.image().get_pixel(200, 40), backdrop.to_rgba());
}
