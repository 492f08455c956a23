//! Passenger type discriminant.
//!
//! Names follow the host's upper-snake convention (`ZOMBIE`, `IRON_GOLEM`)
//! because that is what configuration files list.  Conversion in both
//! directions goes through one generated table so the two can never drift.

use std::fmt;
use std::str::FromStr;

use crate::{VcError, VcResult};

/// Generate `EntityType` plus its name table.
macro_rules! entity_types {
    ($($variant:ident => $name:literal,)+) => {
        /// The type of an entity riding a vehicle.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[non_exhaustive]
        pub enum EntityType {
            $($variant,)+
        }

        impl EntityType {
            /// Every known type, in declaration order.
            pub const ALL: &'static [EntityType] = &[$(EntityType::$variant,)+];

            /// Upper-snake host name, e.g. `"WITHER_SKELETON"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(EntityType::$variant => $name,)+
                }
            }
        }

        impl FromStr for EntityType {
            type Err = VcError;

            fn from_str(s: &str) -> VcResult<Self> {
                match s.trim() {
                    $($name => Ok(EntityType::$variant),)+
                    other => Err(VcError::UnknownEntityType(other.to_owned())),
                }
            }
        }
    };
}

entity_types! {
    Player          => "PLAYER",
    Zombie          => "ZOMBIE",
    ZombieVillager  => "ZOMBIE_VILLAGER",
    Husk            => "HUSK",
    Drowned         => "DROWNED",
    Skeleton        => "SKELETON",
    Stray           => "STRAY",
    WitherSkeleton  => "WITHER_SKELETON",
    Creeper         => "CREEPER",
    Spider          => "SPIDER",
    CaveSpider      => "CAVE_SPIDER",
    Enderman        => "ENDERMAN",
    Witch           => "WITCH",
    Slime           => "SLIME",
    MagmaCube       => "MAGMA_CUBE",
    Pillager        => "PILLAGER",
    Vindicator      => "VINDICATOR",
    Evoker          => "EVOKER",
    Villager        => "VILLAGER",
    WanderingTrader => "WANDERING_TRADER",
    Pig             => "PIG",
    Cow             => "COW",
    MushroomCow     => "MUSHROOM_COW",
    Sheep           => "SHEEP",
    Chicken         => "CHICKEN",
    Horse           => "HORSE",
    Donkey          => "DONKEY",
    Mule            => "MULE",
    Llama           => "LLAMA",
    Wolf            => "WOLF",
    Ocelot          => "OCELOT",
    Cat             => "CAT",
    Fox             => "FOX",
    Rabbit          => "RABBIT",
    Parrot          => "PARROT",
    IronGolem       => "IRON_GOLEM",
    Snowman         => "SNOWMAN",
    PolarBear       => "POLAR_BEAR",
    Panda           => "PANDA",
    Turtle          => "TURTLE",
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
