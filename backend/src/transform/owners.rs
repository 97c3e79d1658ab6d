//! Owner synthesis.
//!
//! The sheet has no landlord column, so listings at the same coordinates are
//! treated as belonging to the same owner. Blank coordinates share a single
//! owner keyed by the empty string.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::models::Owner;

pub const FIRST_NAMES: &[&str] = &[
    "Juan", "Maria", "Jose", "Ana", "Pedro", "Rosa", "Carlos", "Elena", "Miguel", "Sofia",
    "Ricardo", "Carmen", "Antonio", "Isabel", "Fernando", "Teresa", "Luis", "Patricia",
];

pub const LAST_NAMES: &[&str] = &[
    "Santos", "Reyes", "Cruz", "Bautista", "Garcia", "Martinez", "Rodriguez", "Lopez",
    "Gonzales", "Hernandez", "Perez", "Sanchez", "Ramirez", "Torres", "Rivera", "Gomez",
];

/// Owners keyed by coordinate string, ids handed out in first-seen order.
#[derive(Debug, Default)]
pub struct OwnerRegistry {
    ids: HashMap<String, u32>,
    owners: Vec<Owner>,
}

impl OwnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the owner at `coords`, creating one on first sight.
    pub fn resolve_owner<R: Rng + ?Sized>(&mut self, coords: &str, rng: &mut R) -> u32 {
        if let Some(&id) = self.ids.get(coords) {
            return id;
        }

        let id = self.next_id();
        let owner = synthesize_owner(id, rng);
        self.ids.insert(coords.to_string(), id);
        self.owners.push(owner);
        id
    }

    /// Owner for a coordinate key, if one was created.
    pub fn get(&self, coords: &str) -> Option<&Owner> {
        self.ids
            .get(coords)
            .map(|&id| &self.owners[(id - 1) as usize])
    }

    /// Owners in id order.
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn into_owners(self) -> Vec<Owner> {
        self.owners
    }

    fn next_id(&self) -> u32 {
        self.owners.len() as u32 + 1
    }
}

/// Draw a random name pair and phone number for a new owner.
fn synthesize_owner<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Owner {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or(FIRST_NAMES[0]);
    let last = LAST_NAMES.choose(rng).copied().unwrap_or(LAST_NAMES[0]);
    Owner::new(id, first, last, random_phone(rng))
}

/// An 11-digit mobile number: `09` and nine digits, the first non-zero.
pub fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("09{}", rng.gen_range(100_000_000..=999_999_999u32))
}
