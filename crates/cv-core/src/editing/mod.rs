//! Editing lock domain module.
//!
//! Defines the pure transition table for the editing lock. The runtime side,
//! which owns the inactivity timer, lives in the application layer.

pub mod state_machine;

pub use state_machine::{
    EditingAction, EditingEvent, EditingState, EditingStateMachine, DEFAULT_IDLE_TIMEOUT_MS,
};
