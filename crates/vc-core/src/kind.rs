//! Vehicle and item kinds.
//!
//! A vehicle is either a boat (subtyped by wood species) or a minecart
//! (subtyped by what it carries).  Only boats and rideable carts are ever
//! scanned; the other cart kinds exist so the break veto can name them.

use std::fmt;
use std::str::FromStr;

use crate::{VcError, VcResult};

// ── BoatWood ──────────────────────────────────────────────────────────────────

/// Wood species of a boat, which decides the boat item it drops.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoatWood {
    #[default]
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
}

impl BoatWood {
    pub const ALL: [BoatWood; 6] = [
        BoatWood::Oak,
        BoatWood::Spruce,
        BoatWood::Birch,
        BoatWood::Jungle,
        BoatWood::Acacia,
        BoatWood::DarkOak,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BoatWood::Oak     => "OAK",
            BoatWood::Spruce  => "SPRUCE",
            BoatWood::Birch   => "BIRCH",
            BoatWood::Jungle  => "JUNGLE",
            BoatWood::Acacia  => "ACACIA",
            BoatWood::DarkOak => "DARK_OAK",
        }
    }
}

impl FromStr for BoatWood {
    type Err = VcError;

    fn from_str(s: &str) -> VcResult<Self> {
        BoatWood::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VcError::UnknownBoatWood(s.to_owned()))
    }
}

// ── CartKind ──────────────────────────────────────────────────────────────────

/// What a minecart is built to carry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CartKind {
    /// Plain passenger cart: the only cart kind that is scanned.
    #[default]
    Rideable,
    Chest,
    Furnace,
    Hopper,
    Tnt,
    Spawner,
    CommandBlock,
}

impl CartKind {
    /// Special-purpose carts that are never broken, whatever their timer
    /// says.
    #[inline]
    pub fn is_protected(self) -> bool {
        matches!(self, CartKind::Spawner | CartKind::CommandBlock)
    }
}

// ── VehicleKind ───────────────────────────────────────────────────────────────

/// Concrete kind of a vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Boat(BoatWood),
    Minecart(CartKind),
}

impl VehicleKind {
    /// The scan partition this kind belongs to, or `None` for carts that are
    /// categorically excluded from timing and breaking.
    pub fn class(self) -> Option<VehicleClass> {
        match self {
            VehicleKind::Boat(_)                    => Some(VehicleClass::Boat),
            VehicleKind::Minecart(CartKind::Rideable) => Some(VehicleClass::RideableMinecart),
            VehicleKind::Minecart(_)                => None,
        }
    }

    /// The item a broken vehicle of this kind turns back into.
    ///
    /// `None` means the kind has no replacement item; breaking such a vehicle
    /// is vetoed.
    pub fn drop_item(self) -> Option<ItemKind> {
        match self {
            VehicleKind::Boat(wood)                     => Some(ItemKind::Boat(wood)),
            VehicleKind::Minecart(CartKind::Rideable)   => Some(ItemKind::Minecart),
            VehicleKind::Minecart(CartKind::Chest)      => Some(ItemKind::ChestMinecart),
            VehicleKind::Minecart(CartKind::Furnace)    => Some(ItemKind::FurnaceMinecart),
            VehicleKind::Minecart(CartKind::Hopper)     => Some(ItemKind::HopperMinecart),
            VehicleKind::Minecart(CartKind::Tnt)        => Some(ItemKind::TntMinecart),
            VehicleKind::Minecart(CartKind::Spawner)
            | VehicleKind::Minecart(CartKind::CommandBlock) => None,
        }
    }

    /// Host entity-type name used in log lines.
    pub fn entity_name(self) -> &'static str {
        match self {
            VehicleKind::Boat(_)                          => "BOAT",
            VehicleKind::Minecart(CartKind::Rideable)     => "MINECART",
            VehicleKind::Minecart(CartKind::Chest)        => "MINECART_CHEST",
            VehicleKind::Minecart(CartKind::Furnace)      => "MINECART_FURNACE",
            VehicleKind::Minecart(CartKind::Hopper)       => "MINECART_HOPPER",
            VehicleKind::Minecart(CartKind::Tnt)          => "MINECART_TNT",
            VehicleKind::Minecart(CartKind::Spawner)      => "MINECART_MOB_SPAWNER",
            VehicleKind::Minecart(CartKind::CommandBlock) => "MINECART_COMMAND",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity_name())
    }
}

// ── VehicleClass ──────────────────────────────────────────────────────────────

/// The partitions a world is enumerated by during a scan, in scan order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VehicleClass {
    Boat,
    RideableMinecart,
}

impl VehicleClass {
    pub const SCANNED: [VehicleClass; 2] = [VehicleClass::Boat, VehicleClass::RideableMinecart];
}

// ── ItemKind ──────────────────────────────────────────────────────────────────

/// A replacement item dropped when a vehicle breaks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Boat(BoatWood),
    Minecart,
    ChestMinecart,
    FurnaceMinecart,
    HopperMinecart,
    TntMinecart,
}

impl ItemKind {
    /// Host material name, e.g. `"SPRUCE_BOAT"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Boat(BoatWood::Oak)     => "OAK_BOAT",
            ItemKind::Boat(BoatWood::Spruce)  => "SPRUCE_BOAT",
            ItemKind::Boat(BoatWood::Birch)   => "BIRCH_BOAT",
            ItemKind::Boat(BoatWood::Jungle)  => "JUNGLE_BOAT",
            ItemKind::Boat(BoatWood::Acacia)  => "ACACIA_BOAT",
            ItemKind::Boat(BoatWood::DarkOak) => "DARK_OAK_BOAT",
            ItemKind::Minecart                => "MINECART",
            ItemKind::ChestMinecart           => "CHEST_MINECART",
            ItemKind::FurnaceMinecart         => "FURNACE_MINECART",
            ItemKind::HopperMinecart          => "HOPPER_MINECART",
            ItemKind::TntMinecart             => "TNT_MINECART",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
