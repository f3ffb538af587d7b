use block_render::{
    AnimationConfig, AnimationStyle, BlockRenderer, FrameGenerator, RenderConfig,
    TYPING_PAUSE_FRAMES,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generator(text: &str, config: AnimationConfig, seed: u64) -> FrameGenerator {
    FrameGenerator::new(text, BlockRenderer::default(), config, StdRng::seed_from_u64(seed))
}

fn styled(style: AnimationStyle) -> AnimationConfig {
    AnimationConfig { style, ..AnimationConfig::default() }
}

#[test]
fn zero_chance_never_affects_letters() {
    for style in [AnimationStyle::Blink, AnimationStyle::Glitch] {
        let config = AnimationConfig {
            effect_chance: 0.0,
            min_affected: 10,
            max_affected: 10,
            ..styled(style)
        };
        let mut frames = generator("ZERO", config, 5);
        for _ in 0..200 {
            let plan = frames.next_plan();
            assert!(plan.hidden().is_empty());
            assert!(plan.glitched().is_empty());
        }
    }
}

#[test]
fn full_chance_hits_on_every_draw() {
    let text = "ABCDEFGH";
    // Eight draws over eight letters with replacement cover 1 - (7/8)^8 of them.
    let expected = 1.0 - (7.0f64 / 8.0).powi(8);
    for style in [AnimationStyle::Blink, AnimationStyle::Glitch] {
        let config = AnimationConfig {
            effect_chance: 1.0,
            min_affected: text.len(),
            max_affected: text.len(),
            ..styled(style)
        };
        let mut frames = generator(text, config, 9);
        let samples = 2_000;
        let mut hits = 0;
        for _ in 0..samples {
            let plan = frames.next_plan();
            hits += match style {
                AnimationStyle::Glitch => plan.glitched().len(),
                _ => plan.hidden().len(),
            };
        }
        let observed = hits as f64 / (samples * text.len()) as f64;
        assert!((observed - expected).abs() < 0.03, "{style}: observed {observed}, expected {expected}");
    }
}

#[test]
fn hidden_rate_tracks_chance() {
    let text = "ABCDEFGHIJ";
    let config = AnimationConfig {
        effect_chance: 0.25,
        min_affected: 1,
        max_affected: 1,
        ..styled(AnimationStyle::Blink)
    };
    let mut frames = generator(text, config, 21);
    let samples = 4_000;
    let hits: usize = (0..samples).map(|_| frames.next_plan().hidden().len()).sum();
    let observed = hits as f64 / samples as f64;
    assert!((observed - 0.25).abs() < 0.03, "observed {observed}");
}

#[test]
fn pulse_blanks_every_second_frame() {
    let config = AnimationConfig { effect_chance: 0.5, ..styled(AnimationStyle::Pulse) };
    let mut frames = generator("ALERT", config, 0);
    let full = BlockRenderer::default().render("ALERT");
    for index in 1..=12 {
        let plan = frames.next_plan();
        if index % 2 == 0 {
            assert_eq!(plan.hidden().len(), 5, "frame {index}");
        } else {
            assert_eq!(plan.visible().len(), 5, "frame {index}");
        }
    }
    let odd = frames.next_frame();
    assert_eq!(odd, full);
    let even = frames.next_frame();
    assert!(!even.contains('█'));
}

#[test]
fn sequence_visits_every_index_once_per_cycle() {
    let text = "SEQUENCE";
    let mut frames = generator(text, styled(AnimationStyle::Sequence), 0);
    for _ in 0..3 {
        let mut seen: Vec<usize> =
            (0..text.len()).flat_map(|_| frames.next_plan().hidden()).collect();
        assert_eq!(seen.len(), text.len());
        seen.sort_unstable();
        assert_eq!(seen, (0..text.len()).collect::<Vec<_>>());
    }
}

#[test]
fn typing_reveals_then_pauses_then_restarts() {
    let text = "TYPE";
    let len = text.len();
    let mut frames = generator(text, styled(AnimationStyle::Typing), 0);
    let counts: Vec<usize> = (0..2 * (len + TYPING_PAUSE_FRAMES))
        .map(|_| frames.next_plan().visible().len())
        .collect();
    // Frames 1..=len reveal one letter each, len..len+5 hold, then restart at 0.
    assert_eq!(counts, vec![1, 2, 3, 4, 4, 4, 4, 4, 0, 1, 2, 3, 4, 4, 4, 4, 4, 0]);
}

proptest! {
    #[test]
    fn wave_shows_a_contiguous_window(len in 1usize..12, width in 1usize..6, steps in 1usize..40) {
        let text: String = "ABCDEFGHIJKL".chars().take(len).collect();
        let config = AnimationConfig { wave_width: width, ..styled(AnimationStyle::Wave) };
        let mut frames = generator(&text, config, 0);
        for _ in 0..steps {
            let visible = frames.next_plan().visible();
            prop_assert!(visible.len() <= width.min(len));
            if let (Some(first), Some(last)) = (visible.first(), visible.last()) {
                prop_assert_eq!(last - first + 1, visible.len());
            }
            let position = frames.frame_count() % (len + width);
            if position >= width && position <= len {
                prop_assert_eq!(visible.len(), width.min(len));
            }
        }
    }

    #[test]
    fn every_style_keeps_frame_height(style_index in 0usize..7, text in "[A-Z ]{0,10}", seed in any::<u64>()) {
        let config = styled(AnimationStyle::ALL[style_index]);
        let mut frames = generator(&text, config, seed);
        let renderer = BlockRenderer::new(RenderConfig::default());
        for _ in 0..10 {
            prop_assert_eq!(frames.next_frame().split('\n').count(), renderer.height());
        }
    }
}
