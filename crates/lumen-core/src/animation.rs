use std::fmt;

/// Where the jump happens in a stepped timing function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepPosition {
    JumpStart,
    JumpEnd,
    JumpNone,
    JumpBoth,
}

impl StepPosition {
    pub fn css(self) -> &'static str {
        match self {
            StepPosition::JumpStart => "jump-start",
            StepPosition::JumpEnd => "jump-end",
            StepPosition::JumpNone => "jump-none",
            StepPosition::JumpBoth => "jump-both",
        }
    }
}

/// CSS timing functions used by the animation demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Ease,
    Steps { count: u32, position: StepPosition },
}

impl Easing {
    /// Discrete motion for motion-sensitive users.
    pub const fn stepped(count: u32) -> Self {
        Easing::Steps {
            count,
            position: StepPosition::JumpEnd,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::Ease => f.write_str("ease"),
            Easing::Steps { count, position } => write!(f, "steps({count}, {})", position.css()),
        }
    }
}

/// `transition` shorthand applied to every property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn all(duration_secs: f64, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all {}s {}", self.duration_secs, self.easing)
    }
}
