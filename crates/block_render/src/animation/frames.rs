use std::collections::BTreeSet;

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::render::effect::{FramePlan, GlitchCells, LetterEffect};
use crate::render::BlockRenderer;

use super::config::AnimationConfig;
use super::style::{AnimationStyle, FRAME_STYLES};

/// Frames the typing style holds the full text before restarting.
pub const TYPING_PAUSE_FRAMES: usize = 5;
/// Probability that a single cell of a glitched letter shows noise.
pub const GLITCH_CELL_CHANCE: f64 = 0.7;

/// Produces successive animation frames for one text.
///
/// The frame counter is incremented before every frame, so the first frame
/// has index 1. Randomness comes only from the owned RNG, which makes a
/// generator built from a fixed seed fully reproducible.
#[derive(Debug)]
pub struct FrameGenerator {
    letters: Vec<char>,
    renderer: BlockRenderer,
    config: AnimationConfig,
    frame_count: usize,
    rng: StdRng,
    random_style: Option<AnimationStyle>,
}

impl FrameGenerator {
    pub fn new(text: &str, renderer: BlockRenderer, config: AnimationConfig, rng: StdRng) -> Self {
        let letters = text.to_uppercase().chars().collect();
        Self { letters, renderer, config, frame_count: 0, rng, random_style: None }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn renderer(&self) -> &BlockRenderer {
        &self.renderer
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AnimationConfig {
        &mut self.config
    }

    /// Frames produced since creation or the last [`reset`](Self::reset).
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Sub-style currently driven by the random style, if one was chosen.
    pub fn active_random_style(&self) -> Option<AnimationStyle> {
        self.random_style
    }

    pub fn reset(&mut self) {
        self.frame_count = 0;
        self.random_style = None;
    }

    pub fn next_frame(&mut self) -> String {
        let plan = self.next_plan();
        self.renderer.render_letters(&self.letters, plan.effects())
    }

    /// Advance one frame and return its per-letter effects.
    pub fn next_plan(&mut self) -> FramePlan {
        self.frame_count = self.frame_count.wrapping_add(1);
        let style = match self.config.style {
            AnimationStyle::Random => self.random_substyle(),
            style => style,
        };
        self.plan_for(style)
    }

    fn plan_for(&mut self, style: AnimationStyle) -> FramePlan {
        match style {
            AnimationStyle::Blink => self.blink(),
            AnimationStyle::Pulse => self.pulse(),
            AnimationStyle::Wave => self.wave(),
            AnimationStyle::Typing => self.typing(),
            AnimationStyle::Glitch => self.glitch(),
            AnimationStyle::Sequence => self.sequence(),
            // FRAME_STYLES never contains Random.
            AnimationStyle::Random => self.blink(),
        }
    }

    fn random_substyle(&mut self) -> AnimationStyle {
        let switch_frames = self.config.random_switch_frames.max(1);
        let due = self.frame_count == 1 || self.frame_count % switch_frames == 0;
        match self.random_style {
            Some(style) if !due => style,
            _ => {
                let style = FRAME_STYLES[self.rng.gen_range(0..FRAME_STYLES.len())];
                debug!("random animation switched to {style} at frame {}", self.frame_count);
                self.random_style = Some(style);
                style
            },
        }
    }

    fn blink(&mut self) -> FramePlan {
        let mut plan = FramePlan::shown(self.letters.len());
        for index in self.draw_positions() {
            if self.letters[index] != ' ' {
                plan.set(index, LetterEffect::Hide);
            }
        }
        plan
    }

    fn pulse(&mut self) -> FramePlan {
        let len = self.letters.len();
        match pulse_rate(self.config.effect_chance) {
            Some(rate) if self.frame_count % rate == 0 => FramePlan::blank(len),
            _ => FramePlan::shown(len),
        }
    }

    fn wave(&mut self) -> FramePlan {
        let len = self.letters.len();
        let width = self.config.wave_width;
        let period = len.saturating_add(width);
        let mut plan = FramePlan::shown(len);
        if period == 0 {
            return plan;
        }

        let position = self.frame_count % period;
        let start = position.saturating_sub(width);
        for index in 0..len {
            if index < start || index >= position {
                plan.set(index, LetterEffect::Hide);
            }
        }
        plan
    }

    fn typing(&mut self) -> FramePlan {
        let len = self.letters.len();
        let visible = self.frame_count % (len + TYPING_PAUSE_FRAMES);
        let mut plan = FramePlan::shown(len);
        for index in visible..len {
            plan.set(index, LetterEffect::Hide);
        }
        plan
    }

    fn glitch(&mut self) -> FramePlan {
        let mut plan = FramePlan::shown(self.letters.len());
        for index in self.draw_positions() {
            if self.letters[index] != ' ' {
                let cells = self.glitch_cells();
                plan.set(index, LetterEffect::Glitch(cells));
            }
        }
        plan
    }

    fn sequence(&mut self) -> FramePlan {
        let len = self.letters.len();
        let mut plan = FramePlan::shown(len);
        if len > 0 {
            let index = self.frame_count % len;
            if self.letters[index] != ' ' {
                plan.set(index, LetterEffect::Hide);
            }
        }
        plan
    }

    /// Letter indices hit by this frame's draws. Repeated hits collapse.
    fn draw_positions(&mut self) -> BTreeSet<usize> {
        let len = self.letters.len();
        let chance = self.config.effect_chance;
        let mut hits = BTreeSet::new();
        // No draw can succeed, however many are requested.
        if len == 0 || chance.is_nan() || chance <= 0.0 {
            return hits;
        }

        let min = self.config.min_affected;
        let max = self.config.max_affected;
        let mut draws = min;
        if max > min {
            draws += self.rng.gen_range(0..=max - min);
        }

        for _ in 0..draws {
            if hits.len() >= len {
                break;
            }
            if self.rng.gen::<f64>() < chance {
                hits.insert(self.rng.gen_range(0..len));
            }
        }
        hits
    }

    fn glitch_cells(&mut self) -> GlitchCells {
        let glyphs: Vec<char> = self.config.glitch_glyphs.chars().collect();
        let fallback = self.renderer.config().fill.chars().next().unwrap_or('█');
        let width = self.renderer.glyph_width();
        let count = width * self.renderer.height();

        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            let cell = if self.rng.gen::<f64>() < GLITCH_CELL_CHANCE {
                if glyphs.is_empty() {
                    Some(fallback)
                } else {
                    Some(glyphs[self.rng.gen_range(0..glyphs.len())])
                }
            } else {
                None
            };
            cells.push(cell);
        }
        GlitchCells::new(width, cells)
    }
}

/// Frames per pulse cycle, or `None` when the chance cannot produce a pulse.
pub fn pulse_rate(chance: f64) -> Option<usize> {
    if chance.is_nan() || chance <= 0.0 {
        return None;
    }
    // Float to int casts saturate, so huge rates clamp to usize::MAX.
    Some(((1.0 / chance).round() as usize).max(1))
}
