//! A simple example showing the use of a Bloom filter and a verified list.
//!
//! Run with `RUST_LOG=bloomvec=trace` to see which lookups the filter answers.
use bloomvec::{BloomFilter, BloomVec};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bf = BloomFilter::new();

    println!("Should be true:");
    println!("{}", bf.record("test").probably_contains("test"));
    println!("Should be false:");
    println!("{}", bf.probably_contains("test2"));

    let mut list = BloomVec::new();
    list.insert("test");

    println!("Should be true:");
    println!("{}", list.contains("test"));
    println!("Should be false:");
    println!("{}", list.contains("test2"));
}
