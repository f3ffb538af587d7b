/// How a single letter is drawn in one animation frame.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LetterEffect {
    #[default]
    Show,
    /// The whole scaled glyph area becomes the space glyph.
    Hide,
    /// The scaled glyph area is replaced cell by cell.
    Glitch(GlitchCells),
}

/// Corruption for one letter: a grid of scaled cells, each either a glitch
/// character or `None` for the space glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlitchCells {
    width: usize,
    cells: Vec<Option<char>>,
}

impl GlitchCells {
    pub fn new(width: usize, cells: Vec<Option<char>>) -> Self {
        Self { width, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Cell at `row`/`column`; missing cells read as blank.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        if column >= self.width {
            return None;
        }
        self.cells.get(row * self.width + column).copied().flatten()
    }
}

/// Per-letter effects for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FramePlan {
    effects: Vec<LetterEffect>,
}

impl FramePlan {
    /// Every letter drawn normally.
    pub fn shown(len: usize) -> Self {
        Self { effects: vec![LetterEffect::Show; len] }
    }

    /// Every letter hidden.
    pub fn blank(len: usize) -> Self {
        Self { effects: vec![LetterEffect::Hide; len] }
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effects(&self) -> &[LetterEffect] {
        &self.effects
    }

    pub fn set(&mut self, index: usize, effect: LetterEffect) {
        if let Some(slot) = self.effects.get_mut(index) {
            *slot = effect;
        }
    }

    pub fn hidden(&self) -> Vec<usize> {
        self.indices(|effect| matches!(effect, LetterEffect::Hide))
    }

    pub fn glitched(&self) -> Vec<usize> {
        self.indices(|effect| matches!(effect, LetterEffect::Glitch(_)))
    }

    pub fn visible(&self) -> Vec<usize> {
        self.indices(|effect| matches!(effect, LetterEffect::Show))
    }

    fn indices(&self, predicate: impl Fn(&LetterEffect) -> bool) -> Vec<usize> {
        self.effects
            .iter()
            .enumerate()
            .filter(|(_, effect)| predicate(effect))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_ignores_out_of_range_indices() {
        let mut plan = FramePlan::shown(3);
        plan.set(1, LetterEffect::Hide);
        plan.set(7, LetterEffect::Hide);
        assert_eq!(plan.hidden(), vec![1]);
        assert_eq!(plan.visible(), vec![0, 2]);
    }

    #[test]
    fn glitch_cells_outside_grid_are_blank() {
        let cells = GlitchCells::new(2, vec![Some('x'), None, None, Some('y')]);
        assert_eq!(cells.get(0, 0), Some('x'));
        assert_eq!(cells.get(1, 1), Some('y'));
        assert_eq!(cells.get(0, 2), None);
        assert_eq!(cells.get(5, 0), None);
    }
}
