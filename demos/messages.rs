//! Prints one of every message kind with terminal colors.
//!
//! Run with `cargo run --example messages`. Pass `--log <path>` to write
//! library diagnostics to a file, and `--accent <color>` to try a custom
//! accent color (any name, `#RRGGBB` or `rgb(r, g, b)`).

use std::path::PathBuf;

use clap::Parser;
use orefield_text::{
    Category, Component, ComponentText, Decorations, NamedColor, Palette, Property, Text, texts,
};

/// Print sample OreField messages.
#[derive(Parser, Debug)]
#[command(name = "messages", about = "Print one of every OreField message kind")]
struct Args {
    /// Write library diagnostics to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Also print a title using this accent color
    #[arg(long)]
    accent: Option<String>,
}

fn main() -> orefield_text::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        orefield_text::init_logger(path)?;
    }

    println!("{}", texts::orefield().to_ansi());
    println!("{}", texts::category_title(&Category::NETWORK)?.to_ansi());
    println!(
        "{}",
        texts::information(&Category::CHAT, Component::text("You joined the global channel."))?
            .to_ansi()
    );
    println!(
        "{}",
        texts::error(Component::text("Player not found."))?.to_ansi()
    );
    println!(
        "{}",
        texts::warning(Component::text("Unable to teleport 2/10 players."))?.to_ansi()
    );

    let prompt = Component::text("Vote for us! ")
        .append(texts::call_to_action(Component::text("CLICK HERE"))?);
    println!("{}", prompt.to_ansi());

    let status = texts::property_group(
        "SERVER",
        vec![
            Property::of("TPS", Component::text("20"))?,
            Property::of(
                "Players",
                Component::text("53/100").color(NamedColor::Green.into()),
            )?,
            Property::of(
                "Uptime",
                Component::text("4d 2h").decorate(Decorations::ITALIC),
            )?,
        ],
    )?;
    for line in status {
        println!("{}", line.to_ansi());
    }

    if let Some(accent) = &args.accent {
        let palette = Palette::builder().accent(accent).build()?;
        let custom = ComponentText::with_palette(palette);
        println!("{}", custom.title("CUSTOM ACCENT")?.to_ansi());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_options() {
        let args =
            Args::try_parse_from(["messages", "--log", "demo.log", "--accent", "#55FFFF"]).unwrap();

        assert_eq!(args.log, Some(PathBuf::from("demo.log")));
        assert_eq!(args.accent.as_deref(), Some("#55FFFF"));
    }

    #[test]
    fn log_does_not_swallow_the_next_flag() {
        let err = Args::try_parse_from(["messages", "--log", "--accent", "#55FFFF"]).unwrap_err();
        assert!(err.to_string().contains("--log"));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        let err = Args::try_parse_from(["messages", "--colour", "gold"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn options_are_optional() {
        let args = Args::try_parse_from(["messages"]).unwrap();
        assert!(args.log.is_none());
        assert!(args.accent.is_none());
    }
}
