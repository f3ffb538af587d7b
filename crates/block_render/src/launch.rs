//! One-call launchers.
//!
//! [`render`] and [`render_with_scale`] return a static banner. The animation
//! functions render `text` with the default [`RenderConfig`], apply the style's
//! preset [`AnimationConfig`] and block until the animation is interrupted.

use std::sync::Arc;
use std::time::Duration;

use crate::{Animation, AnimationConfig, AnimationError, AnimationStyle, BlockRenderer, RenderConfig};

/// Banner for `text` with the default glyphs.
pub fn render(text: &str) -> String {
    BlockRenderer::default().render(text)
}

/// Banner for `text` with every cell repeated `scale` times; 0 counts as 1.
pub fn render_with_scale(text: &str, scale: usize) -> String {
    BlockRenderer::new(RenderConfig { scale, ..RenderConfig::default() }).render(text)
}

pub fn blink(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Blink)
}

pub fn pulse(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Pulse)
}

pub fn wave(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Wave)
}

pub fn typing(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Typing)
}

pub fn glitch(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Glitch)
}

pub fn sequence(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Sequence)
}

pub fn random(text: &str) -> Result<(), AnimationError> {
    run_style(text, AnimationStyle::Random)
}

pub fn run_style(text: &str, style: AnimationStyle) -> Result<(), AnimationError> {
    run_with_config(text, RenderConfig::default(), AnimationConfig::preset(style))
}

pub fn run_with_config(
    text: &str,
    render: RenderConfig,
    config: AnimationConfig,
) -> Result<(), AnimationError> {
    Animation::new(text, render, config).start()
}

/// Run the `style` preset for `duration`, then return.
pub fn run_for(text: &str, style: AnimationStyle, duration: Duration) -> Result<(), AnimationError> {
    let animation = Arc::new(Animation::new(text, RenderConfig::default(), AnimationConfig::preset(style)));
    animation.start_for(duration)
}
