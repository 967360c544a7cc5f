use std::fmt;

/// Active edit mode. Exactly one value is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    /// Primary clicks insert nothing.
    #[default]
    None,
    Zero,
    Pole,
    DoubleZero,
    DoublePole,
}

impl EditMode {
    /// The four selectable modes in toolbar order.
    pub const TOGGLES: [EditMode; 4] = [
        EditMode::Zero,
        EditMode::Pole,
        EditMode::DoubleZero,
        EditMode::DoublePole,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditMode::None => "None",
            EditMode::Zero => "Zero",
            EditMode::Pole => "Pole",
            EditMode::DoubleZero => "Double Zero",
            EditMode::DoublePole => "Double Pole",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Single-select state over [`EditMode`].
///
/// Exclusivity comes from storing one value; toggle callbacks only ever
/// replace it.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    current: EditMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.current
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.current = mode;
    }

    /// Radio-button style callback. A toggle that becomes checked activates
    /// its mode; one that becomes unchecked is ignored, since its sibling's
    /// activation already replaced the state.
    pub fn on_toggle(&mut self, mode: EditMode, checked: bool) {
        if checked {
            self.current = mode;
        }
    }

    pub fn is_active(&self, mode: EditMode) -> bool {
        self.current == mode
    }
}
