/// Ticks the detail popup takes to slide into place.
pub const SLIDE_FRAMES: u8 = 3;

/// Visibility of the detail modal. `Open` carries the index of the selected
/// record and how far the slide-in transition has progressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { index: usize, frame: u8 },
}

impl ModalState {
    /// Open on `index`. Switching records while already open keeps the popup
    /// where it is; opening from closed restarts the slide.
    pub fn select(&mut self, index: usize) {
        *self = match *self {
            ModalState::Closed => ModalState::Open { index, frame: 0 },
            ModalState::Open { frame, .. } => ModalState::Open { index, frame },
        };
    }

    pub fn dismiss(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            ModalState::Open { index, .. } => Some(*index),
            ModalState::Closed => None,
        }
    }

    pub fn advance(&mut self) {
        if let ModalState::Open { frame, .. } = self {
            *frame = (*frame + 1).min(SLIDE_FRAMES);
        }
    }

    /// 0.0 when the popup has just appeared, 1.0 once it has settled.
    pub fn slide_progress(&self) -> f64 {
        match self {
            ModalState::Open { frame, .. } => *frame as f64 / SLIDE_FRAMES as f64,
            ModalState::Closed => 0.0,
        }
    }
}

/// Rows the popup still sits below its resting position, given how far it
/// travels in total.
pub fn slide_offset(progress: f64, travel: u16) -> u16 {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    (remaining * travel as f64).round() as u16
}
