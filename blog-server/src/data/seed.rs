use crate::domain::post::{Post, PostFields};

const SEED: &[(&str, &str, &str)] = &[
    (
        "Hello, blog",
        "The first post on a freshly started server.",
        "Ada Lovelace",
    ),
    (
        "Keeping things in memory",
        "Everything written here disappears when the process exits.",
        "Grace Hopper",
    ),
    (
        "Ten things about CRUD",
        "Create, read, update, delete. The other six are left to the reader.",
        "Bill Bob",
    ),
];

/// Demonstration posts loaded at startup when seeding is enabled.
pub fn seed_posts() -> Vec<Post> {
    SEED.iter()
        .map(|(title, content, author)| {
            Post::new(PostFields {
                title: (*title).to_string(),
                content: (*content).to_string(),
                author: (*author).to_string(),
            })
        })
        .collect()
}
