use std::fmt;
use std::str::FromStr;

/// Frame algorithm selected for an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationStyle {
    /// Random letters disappear for a frame.
    #[default]
    Blink,
    /// The whole text blinks at a fixed rate.
    Pulse,
    /// A window of visible letters slides across the text.
    Wave,
    /// Letters appear one at a time, then the text restarts.
    Typing,
    /// Random letters are replaced by noise.
    Glitch,
    /// A single hidden letter walks through the text.
    Sequence,
    /// Periodically switches between the other styles.
    Random,
}

/// Styles [`AnimationStyle::Random`] chooses from.
pub const FRAME_STYLES: [AnimationStyle; 6] = [
    AnimationStyle::Blink,
    AnimationStyle::Pulse,
    AnimationStyle::Wave,
    AnimationStyle::Typing,
    AnimationStyle::Glitch,
    AnimationStyle::Sequence,
];

const AVAILABLE: &str = "blink, pulse, wave, typing, glitch, sequence, random";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown animation `{0}` (available: {})", AVAILABLE)]
pub struct UnknownStyle(pub String);

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 7] = [
        AnimationStyle::Blink,
        AnimationStyle::Pulse,
        AnimationStyle::Wave,
        AnimationStyle::Typing,
        AnimationStyle::Glitch,
        AnimationStyle::Sequence,
        AnimationStyle::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimationStyle::Blink => "blink",
            AnimationStyle::Pulse => "pulse",
            AnimationStyle::Wave => "wave",
            AnimationStyle::Typing => "typing",
            AnimationStyle::Glitch => "glitch",
            AnimationStyle::Sequence => "sequence",
            AnimationStyle::Random => "random",
        }
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownStyle(s.to_owned()))
    }
}
