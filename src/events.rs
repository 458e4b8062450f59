//! Event types for the event loop.

use crate::fetch::LoadOutcome;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    FeedsLoaded(Box<LoadOutcome>),
}
