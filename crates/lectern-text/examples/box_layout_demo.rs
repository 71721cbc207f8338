use std::sync::Arc;

use lectern_config::LecternConfig;
use lectern_text::layout::TextCommand;
use lectern_text::{
    Aabb, BoxOptions, Color, Dimensions, DisplayList, FixedFace, FontRegistry, Point, Style,
    StyledTextBuilder, TextDirection, draw_auto_box, draw_in_box,
};

fn main() {
    // Configuration from lectern.toml and LECTERN_* variables
    let config = LecternConfig::load();
    let registry = FontRegistry::new();

    // Fall back to fixed metrics when no system font can be found
    let style = registry
        .style_from_config(&config.text, Color::BLACK)
        .unwrap_or_else(|error| {
            println!("No usable font ({error}), using fixed metrics.\n");
            let direction = TextDirection::from(config.text.direction);
            Style::new(Arc::new(FixedFace::new(config.text.size, direction)), Color::BLACK)
        });
    let accent = style.recolor(Color::from_rgb_hex(0xD55E00));

    let mut builder = StyledTextBuilder::new();
    builder
        .append(&style.apply("Hello, "))
        .and_then(|b| b.append(&accent.apply("lectern")))
        .and_then(|b| b.append(&style.apply("!\nSecond line\nThird")))
        .expect("pieces share one direction");
    let text = builder.finish();

    println!("=== Box Layout Demo ({}) ===\n", style.direction());
    println!("Measured size: {:?}\n", text.measure(config.layout.line_spacing));

    let mut list = DisplayList::new();
    let options = BoxOptions::from(&config.layout);
    draw_in_box(&mut list, &text, Aabb::new(0.0, 0.0, 640.0, 480.0), &options);
    print_commands("draw_in_box 640x480", &list);

    list.clear();
    draw_auto_box(&mut list, &text, Point::new(320.0, 240.0), Dimensions::new(0.5, 0.5));
    print_commands("draw_auto_box centered on (320, 240)", &list);
}

fn print_commands(title: &str, list: &DisplayList) {
    println!("--- {title} ---");
    for command in &list.commands {
        match command {
            TextCommand::DrawText { text, position, color, .. } => {
                println!(
                    "  draw {:?} at ({:.1}, {:.1}) #{:02x}{:02x}{:02x}",
                    text, position.x, position.y, color.r, color.g, color.b
                );
            }
            TextCommand::PushClip(bounds) => println!("  clip {bounds:?}"),
            TextCommand::PopClip => println!("  unclip"),
        }
    }
    println!();
}
