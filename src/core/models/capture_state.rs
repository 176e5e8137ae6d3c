use std::sync::atomic::{AtomicU8, Ordering};

use crate::core::models::CaptureDestination;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DestinationState {
    Idle = 0,
    Requested = 1,
    InFlight = 2,
}

impl DestinationState {
    fn from_raw(raw_state: u8) -> Self {
        match raw_state {
            1 => DestinationState::Requested,
            2 => DestinationState::InFlight,
            _ => DestinationState::Idle,
        }
    }
}

#[derive(Debug)]
pub struct DestinationStateCell {
    state: AtomicU8,
}

impl Default for DestinationStateCell {
    fn default() -> Self {
        Self {
            state: AtomicU8::new(DestinationState::Idle as u8),
        }
    }
}

impl DestinationStateCell {
    pub fn current(&self) -> DestinationState {
        DestinationState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// Returns false when the cell was not in `from`, leaving it unchanged.
    pub fn transition(&self, from: DestinationState, to: DestinationState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// One state cell per capture destination, shared between the render thread
/// and the background writer.
#[derive(Debug, Default)]
pub struct CaptureRequests {
    screenshot: DestinationStateCell,
    game_preview: DestinationStateCell,
}

impl CaptureRequests {
    pub fn cell_for(&self, destination: CaptureDestination) -> &DestinationStateCell {
        match destination {
            CaptureDestination::Screenshot => &self.screenshot,
            CaptureDestination::GamePreview => &self.game_preview,
        }
    }

    pub fn state_of(&self, destination: CaptureDestination) -> DestinationState {
        self.cell_for(destination).current()
    }

    pub fn request(&self, destination: CaptureDestination) -> DestinationState {
        let cell = self.cell_for(destination);
        if cell.transition(DestinationState::Idle, DestinationState::Requested) {
            return DestinationState::Requested;
        }
        cell.current()
    }

    pub fn claim_requested(&self) -> Vec<CaptureDestination> {
        CaptureDestination::ALL
            .into_iter()
            .filter(|destination| {
                self.cell_for(*destination)
                    .transition(DestinationState::Requested, DestinationState::InFlight)
            })
            .collect()
    }

    pub fn release(&self, destination: CaptureDestination) {
        if !self
            .cell_for(destination)
            .transition(DestinationState::InFlight, DestinationState::Idle)
        {
            log::warn!(
                "[CAPTURE_STATE] {} released while not in flight ({:?})",
                destination,
                self.state_of(destination)
            );
        }
    }

    pub fn requeue(&self, destination: CaptureDestination) {
        self.cell_for(destination)
            .transition(DestinationState::InFlight, DestinationState::Requested);
    }
}
