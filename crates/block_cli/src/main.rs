use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use block_render::{Animation, AnimationConfig, AnimationStyle, BlockRenderer, Color, RenderConfig};
use clap::{CommandFactory, Parser, ValueEnum};
use log::debug;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
Animations:
  blink    - Random letter blinking
  pulse    - Whole text pulses
  wave     - Wave moves through text
  typing   - Typewriter effect
  glitch   - Glitch/corruption effect
  sequence - Sequential letter blinking
  random   - Randomly switches between animations

Examples:
  textblock Hello
  textblock --scale 2 --color green OK
  textblock --char '#' --space '.' DOTS
  textblock --anim blink ERROR
  textblock --anim wave --color cyan LOADING
  textblock --anim typing --interval 150 HELLO
  textblock --anim glitch --chance 0.5 --max 5 SYSTEM
  textblock --anim pulse --interval 500 ALERT";

#[derive(Parser, Debug)]
#[command(author, version, about = "Print text as large block-character banners, optionally animated")]
#[command(after_long_help = AFTER_HELP)]
struct Cli {
    /// Text to render; multiple words are joined with spaces
    text: Vec<String>,
    #[command(flatten)]
    render: RenderSettings,
    #[command(flatten)]
    animation: AnimationSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Scale factor applied to every glyph cell
    #[arg(long, env = "TEXTBLOCK_SCALE", default_value_t = 1)]
    scale: usize,
    /// Glyph used for filled cells
    #[arg(long = "char", env = "TEXTBLOCK_CHAR", default_value = "█")]
    fill: String,
    /// Glyph used for blank cells (e.g. '.', '_')
    #[arg(long, env = "TEXTBLOCK_SPACE", default_value = " ")]
    space: String,
    /// Text color
    #[arg(long, env = "TEXTBLOCK_COLOR", value_enum)]
    color: Option<ColorChoice>,
}

#[derive(Parser, Debug, Clone)]
struct AnimationSettings {
    /// Animation style (blink, pulse, wave, typing, glitch, sequence, random);
    /// without it the banner is printed once
    #[arg(long, value_parser = AnimationStyle::from_str)]
    anim: Option<AnimationStyle>,
    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 100)]
    interval: u64,
    /// Effect chance (0.0 - 1.0)
    #[arg(long, default_value_t = 0.3)]
    chance: f64,
    /// Minimum affected letters per frame
    #[arg(long, default_value_t = 1)]
    min: usize,
    /// Maximum affected letters per frame
    #[arg(long, default_value_t = 3)]
    max: usize,
    /// Letters visible at once in the wave animation
    #[arg(long, default_value_t = 3)]
    wave_width: usize,
    /// Frames before switching animation in random mode
    #[arg(long = "switch", default_value_t = 30)]
    switch_frames: usize,
    /// Animation duration in seconds (0 = until interrupted)
    #[arg(long, default_value_t = 0)]
    duration: u64,
    /// Seed for reproducible effects
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorChoice {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.text.is_empty() {
        Cli::command().print_long_help().context("failed to print usage")?;
        return Ok(ExitCode::FAILURE);
    }

    let text = cli.text.join(" ");
    let render = cli.render.to_config();

    let Some(style) = cli.animation.anim else {
        println!("{}", BlockRenderer::new(render).render(&text));
        return Ok(ExitCode::SUCCESS);
    };

    let config = cli.animation.to_config(style);
    debug!("animating {text:?} with {config:?}");
    let animation = Arc::new(match cli.animation.seed {
        Some(seed) => Animation::with_seed(&text, render, config, seed),
        None => Animation::new(&text, render, config),
    });

    if cli.animation.duration > 0 {
        animation
            .start_for(Duration::from_secs(cli.animation.duration))
            .context("animation failed")?;
    } else {
        animation.start().context("animation failed")?;
    }
    Ok(ExitCode::SUCCESS)
}

impl RenderSettings {
    fn to_config(&self) -> RenderConfig {
        let config = RenderConfig {
            scale: self.scale,
            fill: self.fill.clone(),
            space: self.space.clone(),
            color: None,
        };
        match self.color {
            Some(color) => config.with_color(color.to_color()),
            None => config,
        }
    }
}

impl AnimationSettings {
    fn to_config(&self, style: AnimationStyle) -> AnimationConfig {
        AnimationConfig {
            style,
            interval: Duration::from_millis(self.interval),
            effect_chance: self.chance,
            min_affected: self.min,
            max_affected: self.max,
            wave_width: self.wave_width,
            random_switch_frames: self.switch_frames,
            ..AnimationConfig::default()
        }
    }
}

impl ColorChoice {
    fn to_color(self) -> Color {
        match self {
            ColorChoice::Red => Color::Red,
            ColorChoice::Green => Color::Green,
            ColorChoice::Yellow => Color::Yellow,
            ColorChoice::Blue => Color::Blue,
            ColorChoice::Magenta => Color::Magenta,
            ColorChoice::Cyan => Color::Cyan,
            ColorChoice::White => Color::White,
            ColorChoice::BrightRed => Color::BrightRed,
            ColorChoice::BrightGreen => Color::BrightGreen,
            ColorChoice::BrightYellow => Color::BrightYellow,
            ColorChoice::BrightBlue => Color::BrightBlue,
            ColorChoice::BrightMagenta => Color::BrightMagenta,
            ColorChoice::BrightCyan => Color::BrightCyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_library_configs() {
        let cli = Cli::try_parse_from([
            "textblock",
            "--scale",
            "2",
            "--char",
            "#",
            "--color",
            "bright-cyan",
            "--anim",
            "wave",
            "--interval",
            "150",
            "--wave-width",
            "4",
            "--switch",
            "12",
            "LOADING",
            "NOW",
        ])
        .expect("valid arguments");
        assert_eq!(cli.text.join(" "), "LOADING NOW");

        let render = cli.render.to_config();
        assert_eq!(render.scale, 2);
        assert_eq!(render.fill, "#");
        assert_eq!(render.color.as_deref(), Some(Color::BrightCyan.code()));

        let style = cli.animation.anim.expect("anim given");
        let config = cli.animation.to_config(style);
        assert_eq!(config.style, AnimationStyle::Wave);
        assert_eq!(config.interval, Duration::from_millis(150));
        assert_eq!(config.wave_width, 4);
        assert_eq!(config.random_switch_frames, 12);
    }

    #[test]
    fn unknown_animation_is_rejected_with_choices() {
        let err = Cli::try_parse_from(["textblock", "--anim", "sparkle", "HI"])
            .expect_err("sparkle is not an animation");
        let message = err.to_string();
        assert!(message.contains("sparkle"));
        for style in AnimationStyle::ALL {
            assert!(message.contains(style.name()), "{message}");
        }
    }

    #[test]
    fn every_library_style_is_accepted() {
        for style in AnimationStyle::ALL {
            let name = style.name().to_uppercase();
            let cli = Cli::try_parse_from(["textblock", "--anim", name.as_str(), "HI"])
                .expect("library style names parse");
            assert_eq!(cli.animation.anim, Some(style));
        }
    }
}
