// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod memory;
pub mod time;

pub use memory::{
    MemoryArticleRead, MemoryArticleWrite, MemoryCommentRead, MemoryCommentWrite, MemoryStore,
};
pub use time::{FixedClock, fixed_now};
