use std::time::Duration;

use super::style::AnimationStyle;

pub const DEFAULT_GLITCH_GLYPHS: &str = "░▒▓█▄▀■□●○";

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    pub style: AnimationStyle,
    /// Delay between frames.
    pub interval: Duration,
    /// Probability in [0, 1] that a single draw affects a letter.
    pub effect_chance: f64,
    pub min_affected: usize,
    pub max_affected: usize,
    /// Candidate characters for glitched cells.
    pub glitch_glyphs: String,
    /// Letters visible at once in the wave style.
    pub wave_width: usize,
    /// Frames between sub-style switches in the random style.
    pub random_switch_frames: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            style: AnimationStyle::Blink,
            interval: Duration::from_millis(100),
            effect_chance: 0.3,
            min_affected: 1,
            max_affected: 3,
            glitch_glyphs: DEFAULT_GLITCH_GLYPHS.to_owned(),
            wave_width: 3,
            random_switch_frames: 30,
        }
    }
}

impl AnimationConfig {
    /// Defaults tuned for `style`, as used by the one-call launchers.
    pub fn preset(style: AnimationStyle) -> Self {
        let mut config = Self { style, ..Self::default() };
        match style {
            AnimationStyle::Blink => {},
            AnimationStyle::Pulse => {
                config.interval = Duration::from_millis(500);
                config.effect_chance = 0.3;
            },
            AnimationStyle::Wave => {
                config.interval = Duration::from_millis(150);
                config.wave_width = 3;
            },
            AnimationStyle::Typing => config.interval = Duration::from_millis(200),
            AnimationStyle::Glitch => {
                config.interval = Duration::from_millis(80);
                config.effect_chance = 0.4;
                config.max_affected = 4;
            },
            AnimationStyle::Sequence => config.interval = Duration::from_millis(200),
            AnimationStyle::Random => {
                config.interval = Duration::from_millis(100);
                config.random_switch_frames = 30;
            },
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_keep_their_style() {
        for style in AnimationStyle::ALL {
            assert_eq!(AnimationConfig::preset(style).style, style);
        }
    }

    #[test]
    fn glitch_preset_is_faster_and_denser() {
        let glitch = AnimationConfig::preset(AnimationStyle::Glitch);
        let blink = AnimationConfig::preset(AnimationStyle::Blink);
        assert!(glitch.interval < blink.interval);
        assert_eq!(glitch.max_affected, 4);
        assert_eq!(blink, AnimationConfig::default());
    }
}
