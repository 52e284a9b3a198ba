//! Sun/moon color-mode toggle.
//!
//! Builds the icon switch a site shell would use for its dark/light toggle,
//! seeds it from the operating system color scheme, and prints the resolved
//! visual before and after a toggle.
//!
//! ```sh
//! cargo run --example color_mode
//! ```

use nightswitch::{Glyph, IconSwitch};
use nightswitch_style::{ColorMode, Theme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mode = ColorMode::system();
    let theme = mode.pick(Theme::light(), Theme::dark());
    println!("system color mode: {mode:?}");

    let mut switch = IconSwitch::new()
        .with_left_icon(Glyph::sun())
        .with_right_icon(Glyph::moon())
        .with_size("md")
        .with_color_scheme("purple")
        .with_label("Dark mode")
        .with_checked(mode.is_dark());

    switch.toggled().connect(|&dark| {
        println!("color mode -> {}", if dark { "dark" } else { "light" });
    });

    let visual = switch.render(&theme)?;
    println!(
        "track {} x {}, background {}, thumb at {}",
        visual.track.width, visual.track.height, visual.track.background, visual.thumb.translate_x
    );
    for icon in &visual.track.icons {
        println!("  icon '{}' ({})", icon.glyph.name(), icon.glyph.codepoint());
    }

    switch.toggle();
    let visual = switch.render(&theme)?;
    println!("after toggle: thumb at {}", visual.thumb.translate_x);

    Ok(())
}
