//! `vc-timer`: pending-removal timers and the timeout decision.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`state`]  | `TimerState`: due time plus the occupied-at-tag flag             |
//! | [`store`]  | `TimerStore`: sparse `VehicleId → TimerState` map                |
//! | [`engine`] | `evaluate` → `Decision`; passenger classification                |
//!
//! # Timer lifecycle
//!
//! ```text
//!            untracked ──(empty & break-empty)──────────► tagged{occupied: false}
//!            untracked ──(breakable rider)──────────────► tagged{occupied: true}
//! due  tagged{false} ──(breakable rider)──────────────► tagged{occupied: true, fresh due}
//! due  tagged{*}     ──(empty)─────────────────────────► Break
//! due  tagged{true}  ──(breakable rider)──────────────► Break
//! due  tagged{*}     ──(only non-breakable riders)────► untracked
//! ```
//!
//! Before a timer is due nothing changes, even if the riders do.  A timer
//! created for an empty vehicle can therefore be repurposed for an occupied
//! one at its due check without ever being cleared in between.

pub mod engine;
pub mod state;
pub mod store;


pub use engine::{Decision, evaluate, is_breakable, is_exempt, occupied_breakable};
pub use state::TimerState;
pub use store::TimerStore;
