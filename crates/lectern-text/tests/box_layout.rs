use std::fs;
use std::sync::Arc;

use anyhow::Result;
use lectern_config::LecternConfig;
use lectern_text::{
    Aabb, Alignment, BoxOptions, Color, Dimensions, DisplayList, FixedFace, Point, Style,
    StyledText, StyledTextBuilder, TextCommand, TextDirection, concat, draw_auto_box, draw_in_box,
};

/// Ten pixels per char, twenty-pixel lines.
fn tall_style(direction: TextDirection) -> Style {
    let face = FixedFace::new(10.0, direction).with_line_metrics(16.0, 4.0);
    Style::new(Arc::new(face), Color::BLACK)
}

/// Ten pixels per char, ten-pixel lines.
fn square_style(direction: TextDirection) -> Style {
    Style::new(Arc::new(FixedFace::new(10.0, direction)), Color::BLACK)
}

fn draw(text: &StyledText, bounds: Aabb, options: &BoxOptions) -> DisplayList {
    let mut list = DisplayList::new();
    draw_in_box(&mut list, text, bounds, options);
    list
}

#[test]
fn measures_hello_in_both_orientations() {
    let horizontal = tall_style(TextDirection::HorizontalLtr).apply("Hello").to_styled();
    assert_eq!(horizontal.measure(0.0), Dimensions::new(50.0, 20.0));

    for direction in [TextDirection::VerticalLtrStack, TextDirection::VerticalRtlStack] {
        let vertical = tall_style(direction).apply("Hello").to_styled();
        assert_eq!(vertical.measure(0.0), Dimensions::new(20.0, 50.0), "{direction}");
    }
}

#[test]
fn concatenation_measures_like_joined_text() -> Result<()> {
    let style = tall_style(TextDirection::HorizontalLtr);
    for (x, y) in [("Hel", "lo"), ("ab\n", "cd"), ("", "x\ny"), ("one\n", "\n")] {
        let joined = style.apply(format!("{x}{y}")).to_styled();

        let pairwise = style.apply(x).to_styled().concat(&style.apply(y).to_styled())?;
        assert_eq!(pairwise.measure(0.5), joined.measure(0.5), "{x:?} + {y:?}");

        let pieces = concat([&style.apply(x), &style.apply(y)])?;
        assert_eq!(pieces.measure(0.0), joined.measure(0.0), "{x:?} + {y:?}");
    }
    Ok(())
}

#[test]
fn vertical_append_to_horizontal_builder_fails() {
    let mut builder = StyledTextBuilder::new();
    builder
        .append(&tall_style(TextDirection::HorizontalLtr).apply("a\nb"))
        .expect("first append locks direction");
    let count = builder.len();

    let result = builder.append(&tall_style(TextDirection::VerticalLtrStack).apply("c"));
    assert!(result.is_err());
    assert_eq!(builder.len(), count);
    assert_eq!(builder.finish().direction(), Some(TextDirection::HorizontalLtr));
}

#[test]
fn horizontal_ltr_lines_stack_downward() {
    let text = square_style(TextDirection::HorizontalLtr).apply("ab\ncde").to_styled();
    let options = BoxOptions {
        align: Alignment::Center,
        vert_align: Alignment::End,
        ..BoxOptions::default()
    };
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &options);
    assert_eq!(
        list.texts(),
        [("ab", Point::new(40.0, 80.0)), ("cde", Point::new(35.0, 90.0))]
    );
}

#[test]
fn horizontal_rtl_runs_move_leftward() {
    let style = square_style(TextDirection::HorizontalRtl);
    let text = concat([&style.apply("ab"), &style.apply("cd\nefg")]).unwrap();
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &BoxOptions::default());
    assert_eq!(
        list.texts(),
        [
            ("ab", Point::new(100.0, 0.0)),
            ("cd", Point::new(80.0, 0.0)),
            ("efg", Point::new(100.0, 10.0)),
        ]
    );
}

/// Horizontal `[min, max]` covered by each drawn run of right-to-left text,
/// whose position is the run's right edge.
fn rtl_spans(list: &DisplayList) -> Vec<(f32, f32)> {
    list.texts()
        .iter()
        .map(|(text, p)| (p.x - 10.0 * text.chars().count() as f32, p.x))
        .collect()
}

#[test]
fn horizontal_rtl_split_runs_cover_the_single_run_span() {
    let style = square_style(TextDirection::HorizontalRtl);
    let whole = style.apply("abcd").to_styled();
    let split = concat([&style.apply("ab"), &style.apply("cd")]).unwrap();

    for (align, expected) in [
        (Alignment::Auto, (60.0, 100.0)),
        (Alignment::End, (60.0, 100.0)),
        (Alignment::Center, (30.0, 70.0)),
        (Alignment::Start, (0.0, 40.0)),
    ] {
        let options = BoxOptions {
            align,
            ..BoxOptions::default()
        };
        let bounds = Aabb::new(0.0, 0.0, 100.0, 10.0);

        let one = rtl_spans(&draw(&whole, bounds, &options));
        assert_eq!(one, [expected], "{align:?}");

        let many = rtl_spans(&draw(&split, bounds, &options));
        assert_eq!(many, [(expected.0 + 20.0, expected.1), (expected.0, expected.0 + 20.0)], "{align:?}");
    }
}

#[test]
fn vertical_ltr_columns_stack_rightward() {
    let text = square_style(TextDirection::VerticalLtrStack).apply("ab\ncde").to_styled();
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &BoxOptions::default());
    assert_eq!(
        list.texts(),
        [("ab", Point::new(0.0, 0.0)), ("cde", Point::new(10.0, 0.0))]
    );
}

#[test]
fn vertical_rtl_columns_stack_leftward() {
    let text = square_style(TextDirection::VerticalRtlStack).apply("ab\ncde").to_styled();
    let options = BoxOptions {
        vert_align: Alignment::Center,
        ..BoxOptions::default()
    };
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &options);
    assert_eq!(
        list.texts(),
        [("ab", Point::new(100.0, 40.0)), ("cde", Point::new(90.0, 35.0))]
    );
}

#[test]
fn vertical_rtl_columns_stay_inside_the_box() {
    let text = square_style(TextDirection::VerticalRtlStack)
        .apply("a\nb\nc")
        .to_styled();
    assert_eq!(text.measure(0.0), Dimensions::new(30.0, 10.0));

    // Each column spans [x - 10, x].
    for (align, right_edges) in [
        (Alignment::Start, [30.0, 20.0, 10.0]),
        (Alignment::Center, [65.0, 55.0, 45.0]),
        (Alignment::End, [100.0, 90.0, 80.0]),
        (Alignment::Auto, [100.0, 90.0, 80.0]),
    ] {
        let options = BoxOptions {
            align,
            ..BoxOptions::default()
        };
        let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 50.0), &options);
        let xs: Vec<f32> = list.texts().iter().map(|(_, p)| p.x).collect();
        assert_eq!(xs, right_edges, "{align:?}");
    }
}

#[test]
fn vertical_directions_center_on_the_same_span() {
    let centered = BoxOptions {
        align: Alignment::Center,
        ..BoxOptions::default()
    };
    let bounds = Aabb::new(0.0, 0.0, 100.0, 50.0);

    let rtl = square_style(TextDirection::VerticalRtlStack)
        .apply("a\nb\nc\nd")
        .to_styled();
    let xs: Vec<f32> = draw(&rtl, bounds, &centered).texts().iter().map(|(_, p)| p.x).collect();
    assert_eq!(xs, [70.0, 60.0, 50.0, 40.0]);

    let ltr = square_style(TextDirection::VerticalLtrStack)
        .apply("a\nb\nc\nd")
        .to_styled();
    let xs: Vec<f32> = draw(&ltr, bounds, &centered).texts().iter().map(|(_, p)| p.x).collect();
    assert_eq!(xs, [30.0, 40.0, 50.0, 60.0]);
}

#[test]
fn newline_markers_are_never_drawn() {
    let text = square_style(TextDirection::HorizontalLtr).apply("a\n\nb\n").to_styled();
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &BoxOptions::default());

    assert_eq!(
        list.texts(),
        [
            ("a", Point::new(0.0, 0.0)),
            ("", Point::new(0.0, 10.0)),
            ("b", Point::new(0.0, 20.0)),
        ]
    );
    assert_eq!(list.clip_depth(), 0);
}

#[test]
fn line_spacing_spreads_lines() {
    let text = square_style(TextDirection::HorizontalLtr).apply("a\nb").to_styled();
    let options = BoxOptions {
        line_spacing: 1.0,
        ..BoxOptions::default()
    };
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &options);
    assert_eq!(
        list.texts(),
        [("a", Point::new(0.0, 0.0)), ("b", Point::new(0.0, 20.0))]
    );
}

#[test]
fn runs_keep_their_style() {
    let base = square_style(TextDirection::HorizontalLtr);
    let accent = base.recolor(Color::from_rgb_hex(0x0072B2));
    let text = concat([&base.apply("plain "), &accent.apply("blue")]).unwrap();

    let list = draw(&text, Aabb::new(0.0, 0.0, 200.0, 20.0), &BoxOptions::default());
    let colors: Vec<Color> = list
        .commands
        .iter()
        .filter_map(|command| match command {
            TextCommand::DrawText { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors, [Color::BLACK, Color::from_rgb_hex(0x0072B2)]);
}

#[test]
fn auto_box_centers_on_anchor() {
    let text = square_style(TextDirection::HorizontalLtr).apply("abcd\nef").to_styled();
    let mut list = DisplayList::new();
    draw_auto_box(&mut list, &text, Point::new(50.0, 50.0), Dimensions::new(0.5, 0.5));

    match list.commands.first() {
        Some(TextCommand::PushClip(bounds)) => {
            assert_eq!(*bounds, Aabb::new(30.0, 40.0, 70.0, 60.0));
        }
        other => panic!("expected a clip first, got {other:?}"),
    }
    assert_eq!(
        list.texts(),
        [("abcd", Point::new(30.0, 40.0)), ("ef", Point::new(30.0, 50.0))]
    );
    assert_eq!(list.clip_depth(), 0);
}

#[test]
fn auto_box_of_empty_text_only_clips() {
    let mut list = DisplayList::new();
    draw_auto_box(
        &mut list,
        &StyledText::default(),
        Point::new(10.0, 10.0),
        Dimensions::new(1.0, 1.0),
    );
    assert_eq!(list.len(), 2);
    assert!(list.texts().is_empty());
}

#[test]
fn layout_options_load_from_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lectern.toml");
    fs::write(
        &path,
        r#"
        [layout]
        align = "end"
        vert_align = "center"
        line_spacing = 1.0
        "#,
    )?;

    let config = LecternConfig::load_from_file(&path)?;
    let options = BoxOptions::from(&config.layout);
    assert_eq!(options.align, Alignment::End);
    assert_eq!(options.vert_align, Alignment::Center);

    let text = square_style(TextDirection::HorizontalLtr).apply("ab").to_styled();
    let list = draw(&text, Aabb::new(0.0, 0.0, 100.0, 100.0), &options);
    assert_eq!(list.texts(), [("ab", Point::new(80.0, 40.0))]);
    Ok(())
}
