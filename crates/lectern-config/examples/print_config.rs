/// Example program to print the loaded configuration
///
/// Run with: cargo run -p lectern-config --example print_config

fn main() {
    // Load configuration from lectern.toml, then apply LECTERN_* overrides
    let config = lectern_config::LecternConfig::load();

    println!("=== Lectern Configuration ===\n");

    println!("Text Settings:");
    println!("  Font: {:?}", config.text.font);
    println!("  Font Path: {:?}", config.text.font_path);
    println!("  Size: {}", config.text.size);
    println!("  Direction: {:?}", config.text.direction);
    println!();

    println!("Layout Settings:");
    println!("  Line Spacing: {}", config.layout.line_spacing);
    println!("  Align: {:?}", config.layout.align);
    println!("  Vert Align: {:?}", config.layout.vert_align);
    println!("  Padding: {:?}", config.layout.padding);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
