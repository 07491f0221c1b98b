use pagelist_sqlx::Entity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// A forum post, the row type used throughout the fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl Entity for Post {
    fn table_name() -> &'static str {
        "posts"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "author_id", "title", "content", "upvotes", "downvotes"]
    }
}

const DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden", "Tools",
    "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes", "Jewelery",
    "Sports", "Outdoors", "Automotive", "Industrial",
];

const DESCRIPTIONS: &[&str] = &[
    "Ergonomic executive chair upholstered in bonded black leather and PVC padded seat and back for all-day comfort and support",
    "The automobile layout consists of a front-engine design, with transaxle-type transmissions mounted at the rear of the engine and four wheel drive",
    "New ABC 13 9370, 13.3, 5th Gen CoreA5-8250U, 8GB RAM, 256GB SSD, power UHD Graphics, OS 10 Home, OS Office A & J 2016",
    "The slim & simple Maple Gaming Keyboard from Dev Byte comes with a sleek body and 7- Color RGB LED Back-lighting for smart functionality",
    "The Apollotech B340 is an affordable wireless mouse with reliable connectivity, 12 months battery life and modern design",
    "Boston's most advanced compression wear technology increases muscle oxygenation, stabilizes active muscles",
    "The Football Is Good For Training And Recreational Purposes",
    "Carbonite web goalkeeper gloves are ergonomically designed to give easy fit",
];

/// Generates [`Post`]s with sequential ids and author ids starting at 1.
///
/// Titles and bodies are drawn from fixed word lists; votes are random in `0..100`.
pub struct PostFaker {
    next_id: i64,
    rng: StdRng,
}

impl PostFaker {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A faker whose output is reproducible for a given `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { next_id: 1, rng }
    }

    pub fn fake(&mut self) -> Post {
        let id = self.next_id;
        self.next_id += 1;
        Post {
            id,
            author_id: id,
            title: DEPARTMENTS[self.rng.gen_range(0..DEPARTMENTS.len())].to_string(),
            content: DESCRIPTIONS[self.rng.gen_range(0..DESCRIPTIONS.len())].to_string(),
            upvotes: self.rng.gen_range(0..100),
            downvotes: self.rng.gen_range(0..100),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<Post> {
        (0..count).map(|_| self.fake()).collect()
    }
}

impl Default for PostFaker {
    fn default() -> Self {
        Self::new()
    }
}
