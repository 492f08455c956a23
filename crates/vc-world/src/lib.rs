//! `vc-world`: the host-world boundary.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`vehicle`]  | `Vehicle`, `Passenger`: per-pass snapshots read by the engine   |
//! | [`host`]     | `World`, `Host` traits: enumeration, removal, item drop         |
//! | [`memory`]   | `MemoryWorld`, `MemoryHost`: in-process host for tests/demos    |
//! | [`populate`] | `Populator`: seeded random spawning and passenger churn         |
//!
//! # Ownership
//!
//! The host owns every vehicle.  `World::vehicles` hands out owned snapshots
//! that reflect the world at call time; nothing here caches across passes.
//! The only mutations the scan may request are `remove_vehicle` and
//! `drop_item`.

pub mod host;
pub mod memory;
pub mod populate;
pub mod vehicle;


pub use host::{Host, World};
pub use memory::{MemoryHost, MemoryWorld};
pub use populate::Populator;
pub use vehicle::{Passenger, Vehicle};
