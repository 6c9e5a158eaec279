//! Memory profiling utilities using dhat.
//!
//! Broadcasting clones the payload once per listener, so heap-backed payloads cost one
//! allocation per subscriber. These helpers make that cost visible. They use dhat-rs to
//! track heap allocations.
//!
//! # Usage
//!
//! Memory profiling adds overhead and should only be enabled when needed:
//!
//! ```bash
//! cargo bench -p rusty_events_bench --features memory_profiling
//! ```
//!
//! # Viewing Results
//!
//! After running with memory profiling, view results at:
//! <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Load the generated `dhat-heap.json` file.

/// Heap statistics captured around a batch of broadcasts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStats {
    /// Total bytes allocated during the measurement.
    pub bytes_allocated: u64,
    /// Total number of allocations.
    pub allocation_count: u64,
    /// Peak heap usage in bytes.
    pub peak_bytes: u64,
}

impl MemoryStats {
    /// Bytes allocated per listener invocation, given `broadcasts` rounds over `listeners`.
    pub fn bytes_per_invocation(&self, broadcasts: usize, listeners: usize) -> f64 {
        match broadcasts * listeners {
            0 => 0.0,
            invocations => self.bytes_allocated as f64 / invocations as f64,
        }
    }

    /// Allocations per listener invocation, given `broadcasts` rounds over `listeners`.
    pub fn allocations_per_invocation(&self, broadcasts: usize, listeners: usize) -> f64 {
        match broadcasts * listeners {
            0 => 0.0,
            invocations => self.allocation_count as f64 / invocations as f64,
        }
    }
}

impl std::fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "allocated: {} bytes ({} allocs), peak: {} bytes",
            self.bytes_allocated, self.allocation_count, self.peak_bytes
        )
    }
}

/// Active dhat heap profiler.
///
/// Start it before the broadcasts under test and call `finish()` afterwards.
#[cfg(feature = "memory_profiling")]
pub struct MemoryProfiler {
    _profiler: dhat::Profiler,
}

#[cfg(feature = "memory_profiling")]
impl MemoryProfiler {
    /// Start heap profiling. Only one profiler may be active per process.
    pub fn start() -> Self {
        Self {
            _profiler: dhat::Profiler::new_heap(),
        }
    }

    /// Stop profiling and return the totals. The full profile lands in `dhat-heap.json`.
    pub fn finish(self) -> MemoryStats {
        let stats = dhat::HeapStats::get();
        MemoryStats {
            bytes_allocated: stats.total_bytes as u64,
            allocation_count: stats.total_blocks as u64,
            peak_bytes: stats.max_bytes as u64,
        }
    }
}

#[cfg(not(feature = "memory_profiling"))]
pub struct MemoryProfiler;

#[cfg(not(feature = "memory_profiling"))]
impl MemoryProfiler {
    /// No-op when memory profiling is disabled.
    pub fn start() -> Self {
        Self
    }

    /// Returns empty stats when memory profiling is disabled.
    pub fn finish(self) -> MemoryStats {
        MemoryStats::default()
    }
}

/// Run `f` under the heap profiler.
///
/// Without the `memory_profiling` feature the closure still runs, and the stats are zero.
pub fn measure_memory<F, R>(f: F) -> (R, MemoryStats)
where
    F: FnOnce() -> R,
{
    let profiler = MemoryProfiler::start();
    let result = f();
    let stats = profiler.finish();
    (result, stats)
}
