/// Field-level events delivered to form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Control lost focus
    Blur { target: String },
    /// Committed change (checkbox toggled, option picked, edit confirmed)
    Change { target: String },
    /// Value edited (every keystroke)
    Input { target: String },
}

impl Event {
    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
        }
    }

    /// ID of the element the event is targeted at.
    pub fn target(&self) -> &str {
        match self {
            Self::Blur { target } | Self::Change { target } | Self::Input { target } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Blur { .. } => EventKind::Blur,
            Self::Change { .. } => EventKind::Change,
            Self::Input { .. } => EventKind::Input,
        }
    }
}

/// Event type without its target, used when registering listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Blur,
    Change,
    Input,
}
