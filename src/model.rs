//! Logical state of a two-thumb range: bounds, thumb values and which thumb
//! responds to input.
//!
//! Every mutator funnels through [`RangeModel::restore`], so the ordering
//! `min <= lower <= higher <= max` (or `lower == higher` in combine mode) is
//! never observable in a violated state.

/// One of the two handles of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Lower,
    Higher,
}

impl Thumb {
    pub fn other(self) -> Self {
        match self {
            Thumb::Lower => Thumb::Higher,
            Thumb::Higher => Thumb::Lower,
        }
    }
}

impl std::fmt::Display for Thumb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Thumb::Lower => write!(f, "lower"),
            Thumb::Higher => write!(f, "higher"),
        }
    }
}

/// Selection and combine mode as a single state.
///
/// Combine mode always acts on the higher thumb, so "combined with nothing
/// selected" cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbMode {
    /// No interaction has happened yet.
    #[default]
    Unselected,
    Active(Thumb),
    /// Both thumbs share one value and are shown as one.
    Combined,
}

impl ThumbMode {
    pub fn selection(self) -> Option<Thumb> {
        match self {
            ThumbMode::Unselected => None,
            ThumbMode::Active(thumb) => Some(thumb),
            ThumbMode::Combined => Some(Thumb::Higher),
        }
    }

    pub fn is_combined(self) -> bool {
        matches!(self, ThumbMode::Combined)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeModel {
    min: i32,
    max: i32,
    lower: i32,
    higher: i32,
    mode: ThumbMode,
    has_lower_thumb: bool,
}

impl RangeModel {
    /// Builds a model, clamping the initial values into the bounds.
    pub fn new(lower: i32, higher: i32, min: i32, max: i32, has_lower_thumb: bool) -> Self {
        let mut model = Self {
            min,
            max,
            lower,
            higher,
            mode: ThumbMode::Unselected,
            has_lower_thumb,
        };
        let (lo, hi) = model.span_bounds();
        model.lower = model.lower.clamp(lo, hi);
        model.restore(Thumb::Higher);
        model
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn higher(&self) -> i32 {
        self.higher
    }

    pub fn mode(&self) -> ThumbMode {
        self.mode
    }

    pub fn selection(&self) -> Option<Thumb> {
        self.mode.selection()
    }

    pub fn is_combined(&self) -> bool {
        self.mode.is_combined()
    }

    pub fn has_lower_thumb(&self) -> bool {
        self.has_lower_thumb
    }

    pub fn value(&self, thumb: Thumb) -> i32 {
        match thumb {
            Thumb::Lower => self.lower,
            Thumb::Higher => self.higher,
        }
    }

    /// Value of the selected thumb, `None` before the first interaction.
    pub fn active_position(&self) -> Option<i32> {
        self.selection().map(|thumb| self.value(thumb))
    }

    pub fn set_lower(&mut self, value: i32) {
        self.set_value(Thumb::Lower, value);
    }

    pub fn set_higher(&mut self, value: i32) {
        self.set_value(Thumb::Higher, value);
    }

    /// Selects `thumb`, assigns `value` and restores the ordering with `thumb`
    /// winning ties. In combine mode the selection stays combined.
    pub fn set_value(&mut self, thumb: Thumb, value: i32) {
        self.select(thumb);
        match thumb {
            Thumb::Lower => self.lower = value,
            Thumb::Higher => self.higher = value,
        }
        self.restore(thumb);
    }

    /// Sets both ends at once. A non-degenerate span leaves combine mode.
    pub fn set_selection_span(&mut self, lower: i32, higher: i32) {
        let (lo, hi) = self.span_bounds();
        self.lower = lower.clamp(lo, hi);
        self.higher = higher.clamp(self.lower, hi);
        if self.lower < self.higher && self.mode.is_combined() {
            log::debug!("span {}..={} leaves combine mode", self.lower, self.higher);
            self.mode = ThumbMode::Active(Thumb::Higher);
        }
        self.restore(Thumb::Higher);
    }

    pub fn set_max(&mut self, max: i32) {
        self.max = max;
        self.restore(Thumb::Higher);
    }

    /// Moves the selected thumb by `-delta` (positive steps toward the
    /// minimum). Selects the higher thumb when nothing is selected yet.
    pub fn move_active_by(&mut self, delta: i32) {
        let thumb = self.selection().unwrap_or(Thumb::Higher);
        self.select(thumb);
        match thumb {
            Thumb::Lower => self.lower = self.lower.saturating_sub(delta),
            Thumb::Higher => self.higher = self.higher.saturating_sub(delta),
        }
        self.restore(thumb);
    }

    pub fn combine_thumbs(&mut self, combine: bool) {
        log::debug!("combine thumbs: {combine}");
        if combine {
            self.mode = ThumbMode::Combined;
            self.restore(Thumb::Higher);
        } else {
            self.mode = ThumbMode::Active(Thumb::Higher);
            self.reset_positions();
        }
    }

    /// Spans the full range again. The higher thumb ends up selected.
    pub fn reset_positions(&mut self) {
        self.set_lower(self.min);
        self.set_higher(self.max);
        let pivot = self.selection().unwrap_or(Thumb::Higher);
        self.restore(pivot);
    }

    /// Marks `thumb` as the one responding to input. No-op in combine mode.
    pub fn select(&mut self, thumb: Thumb) {
        if self.mode.is_combined() {
            return;
        }
        let thumb = if self.has_lower_thumb { thumb } else { Thumb::Higher };
        if self.mode != ThumbMode::Active(thumb) {
            log::trace!("selection -> {thumb}");
            self.mode = ThumbMode::Active(thumb);
        }
    }

    /// Selects the higher thumb if nothing has been selected yet.
    pub fn select_default(&mut self) {
        if self.mode == ThumbMode::Unselected {
            self.select(Thumb::Higher);
        }
    }

    /// Writes the outcome of a drag frame: `value` for the dragged thumb and
    /// `other` for the opposite one, without changing the selection.
    pub(crate) fn commit_drag(&mut self, thumb: Thumb, value: i32, other: i32) {
        match thumb {
            Thumb::Lower => {
                self.lower = value;
                self.higher = other;
            }
            Thumb::Higher => {
                self.higher = value;
                self.lower = other;
            }
        }
        self.restore(thumb);
    }

    fn span_bounds(&self) -> (i32, i32) {
        (self.min.min(self.max), self.min.max(self.max))
    }

    /// Clamps both values into the bounds and merges the thumb opposite to
    /// `pivot` onto it when they cross or combine mode is on.
    fn restore(&mut self, pivot: Thumb) {
        let (lo, hi) = self.span_bounds();
        let combined = self.mode.is_combined();
        match pivot {
            Thumb::Lower => {
                self.lower = self.lower.clamp(lo, hi);
                if self.lower >= self.higher || combined {
                    if self.higher != self.lower {
                        log::trace!("higher thumb merged onto lower at {}", self.lower);
                    }
                    self.higher = self.lower;
                }
                self.higher = self.higher.clamp(lo, hi);
            }
            Thumb::Higher => {
                self.higher = self.higher.clamp(lo, hi);
                if self.higher <= self.lower || combined {
                    if self.lower != self.higher {
                        log::trace!("lower thumb merged onto higher at {}", self.higher);
                    }
                    self.lower = self.higher;
                }
                self.lower = self.lower.clamp(lo, hi);
            }
        }
    }
}
