//! Synthetic catalog entries for seeding demos and larger test fixtures.

use rand::seq::SliceRandom;
use rand::Rng;

const TITLES: [&str; 5] = [
    "The Voyage",
    "Mystery in the Fog",
    "Lost Horizons",
    "The Last Adventure",
    "Chronicles of Time",
];

const AUTHORS: [&str; 5] = ["J. Doe", "A. Perez", "L. Martinez", "M. Gomez", "C. Ramirez"];

/// Random title/author pair. Titles carry a numeric suffix so generated
/// entries stay distinguishable in listings.
pub fn random_book(rng: &mut impl Rng) -> (String, String) {
    let base = TITLES.choose(rng).expect("title pool is non-empty");
    let author = AUTHORS.choose(rng).expect("author pool is non-empty");
    let title = format!("{} {}", base, rng.gen_range(1..=100));
    (title, (*author).to_string())
}
