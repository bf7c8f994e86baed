//! # Weapon Catalog
//!
//! Static tables for every main, sub and special weapon plus the kits built from them.
//!
//! ## Kit Ids
//!
//! Kits are the Cartesian product of the three tables, main-major. A kit id is the position
//! in that product:
//!
//! `id = main_index * (subs * specials) + sub_index * specials + special_index`
//!
//! Ids are dense over every combination, including the ones listed in [`data::EXCLUDED_KITS`],
//! so ids stay stable if the excluded list changes. Excluded kits can still be voted for and
//! ranked. Only [`Catalog::kits`], which feeds the listing, skips them.
use std::collections::HashSet;

use serde::Serialize;

pub mod data;

use data::{EXCLUDED_KITS, MAIN_WEAPONS, SPECIAL_WEAPONS, SUB_WEAPONS};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainWeapon {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub image: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubWeapon {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialWeapon {
    pub name: &'static str,
    pub image: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kit {
    pub id: u32,
    pub main: &'static MainWeapon,
    pub sub: &'static SubWeapon,
    pub special: &'static SpecialWeapon,
}

pub struct Catalog {
    mains: &'static [MainWeapon],
    subs: &'static [SubWeapon],
    specials: &'static [SpecialWeapon],
    excluded: HashSet<(&'static str, &'static str, &'static str)>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            mains: MAIN_WEAPONS,
            subs: SUB_WEAPONS,
            specials: SPECIAL_WEAPONS,
            excluded: EXCLUDED_KITS.iter().copied().collect(),
        }
    }

    pub fn total_combinations(&self) -> u32 {
        (self.mains.len() * self.subs.len() * self.specials.len()) as u32
    }

    pub fn kit_id(&self, main_index: usize, sub_index: usize, special_index: usize) -> u32 {
        let per_main = self.subs.len() * self.specials.len();

        (main_index * per_main + sub_index * self.specials.len() + special_index) as u32
    }

    /// Decodes an id back into its kit, excluded or not.
    pub fn kit(&self, id: u32) -> Option<Kit> {
        if id >= self.total_combinations() {
            return None;
        }

        let id_usize = id as usize;
        let per_main = self.subs.len() * self.specials.len();

        let main_index = id_usize / per_main;
        let sub_index = (id_usize % per_main) / self.specials.len();
        let special_index = id_usize % self.specials.len();

        Some(Kit {
            id,
            main: &self.mains[main_index],
            sub: &self.subs[sub_index],
            special: &self.specials[special_index],
        })
    }

    pub fn is_excluded(&self, kit: &Kit) -> bool {
        self.excluded
            .contains(&(kit.main.name, kit.sub.name, kit.special.name))
    }

    /// Every kit in id order, excluded ones included.
    pub fn all_kits(&self) -> impl Iterator<Item = Kit> + '_ {
        (0..self.total_combinations()).filter_map(|id| self.kit(id))
    }

    /// Every non-excluded kit in id order.
    pub fn kits(&self) -> impl Iterator<Item = Kit> + '_ {
        self.all_kits().filter(|kit| !self.is_excluded(kit))
    }

    /// Distinct main weapon types, in the order they first appear.
    pub fn weapon_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = Vec::new();

        for weapon in self.mains {
            if !types.contains(&weapon.kind) {
                types.push(weapon.kind);
            }
        }

        types
    }

    pub fn sub_names(&self) -> Vec<&'static str> {
        self.subs.iter().map(|sub| sub.name).collect()
    }

    pub fn special_names(&self) -> Vec<&'static str> {
        self.specials.iter().map(|special| special.name).collect()
    }
}
