//! Built-in hangman answers.

use crate::core::GameRng;

/// Default candidate answers. Lowercase ASCII letters only.
pub const WORDS: &[&str] = &[
    "aardvark", "alligator", "alpaca", "anteater", "antelope", "armadillo", "badger", "beaver",
    "bison", "buffalo", "camel", "cheetah", "chimpanzee", "cobra", "coyote", "crocodile",
    "dolphin", "donkey", "elephant", "falcon", "ferret", "flamingo", "gazelle", "giraffe",
    "gorilla", "hamster", "hedgehog", "hippopotamus", "hyena", "iguana", "jaguar", "kangaroo",
    "koala", "leopard", "lobster", "meerkat", "mongoose", "octopus", "ostrich", "otter",
    "panther", "peacock", "pelican", "penguin", "porcupine", "rabbit", "raccoon", "reindeer",
    "rhinoceros", "salamander", "scorpion", "squirrel", "tortoise", "walrus", "weasel", "zebra",
];

/// Pick one answer uniformly from a word list.
///
/// Returns `None` for an empty list.
pub fn choose_one(words: &[String], rng: &mut GameRng) -> Option<String> {
    rng.choose(words).cloned()
}
