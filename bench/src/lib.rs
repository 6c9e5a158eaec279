//! Benchmark utilities for Rusty Events.
//!
//! This crate provides the fixtures and measurement helpers behind the Criterion benches:
//!
//! - **Dispatch**: checked vs unchecked single-event execution
//! - **Fan-out**: broadcast cost across subscriber counts, including isolated broadcast
//! - **Churn**: add/remove cycles and reentrant removal through `Commands`
//! - **Memory tracking**: heap allocation profiling via dhat
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_events_bench
//!
//! # Run specific benchmark group
//! cargo bench -p rusty_events_bench -- fan_out
//!
//! # Run with memory profiling (slower)
//! cargo bench -p rusty_events_bench --features memory_profiling
//! ```
//!
//! # Benchmark Results
//!
//! Results are written to `target/criterion/` with HTML reports for visualization.
//! Memory profiling results are written to `dhat-heap.json` for viewing with
//! DHAT's viewer.

pub mod memory;
pub mod payloads;
