//! `vc-core`: foundational types for the `vehicle_control` workspace.
//!
//! This crate is a dependency of every other `vc-*` crate.  It has no `vc-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`ids`]       | `VehicleId`                                                       |
//! | [`time`]      | `Millis`, `Clock`, `SystemClock`, `ManualClock`                   |
//! | [`geo`]       | `Location` and its `world, x, y, z` formatting                    |
//! | [`entity`]    | `EntityType`: passenger type discriminant                         |
//! | [`kind`]      | `VehicleKind`, `BoatWood`, `CartKind`, `VehicleClass`, `ItemKind` |
//! | [`error`]     | `VcError`, `VcResult`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod entity;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use entity::EntityType;
pub use error::{VcError, VcResult};
pub use geo::Location;
pub use ids::VehicleId;
pub use kind::{BoatWood, CartKind, ItemKind, VehicleClass, VehicleKind};
pub use time::{Clock, ManualClock, Millis, SystemClock};
