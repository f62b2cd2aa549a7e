/// Greedy row-major assembly of one map attempt
pub mod assembler;
/// Fixed-size candidate sets over catalog positions
pub mod bitset;
/// Side-indexed bit packing for connectivity masks
pub mod codec;
/// Attempt orchestration with retries on catalog exhaustion
pub mod executor;
/// Tile compatibility predicate
pub mod matching;
/// Seeded random choices
pub mod selection;
