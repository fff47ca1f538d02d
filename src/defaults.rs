// src/defaults.rs

// Data generation
pub const ELEMENTS: usize = 1_000_000;
pub const ELEMENTS_LARGE: usize = 100_000_000;
pub const AGE_MODULUS: usize = 100;
/// Sum of one full `0..AGE_MODULUS` cycle: 0 + 1 + ... + 99.
pub const AGE_CYCLE_SUM: u64 = 4950;
pub const RANDOM_SEED: u64 = 42;

// Parallel reduction
/// Below this many bytes the reducer stays on the calling thread.
pub const MIN_PARALLEL_LEN: usize = 64 * 1024;
/// Chunk length for the `par_chunks` reduction.
pub const CHUNK_LEN: usize = 64 * 1024;
/// Upper bound on threads, expressed as a multiple of the logical CPU count.
pub const MAX_THREADS_PER_CPU: usize = 2;

// Environment overrides
pub const ENV_ELEMENTS: &str = "FERROUS_BYTESUM_ELEMENTS";
pub const ENV_THREADS: &str = "FERROUS_BYTESUM_THREADS";
pub const ENV_KERNEL: &str = "FERROUS_BYTESUM_KERNEL";
pub const ENV_FORCE_SSE: &str = "FERROUS_BYTESUM_FORCE_SSE";
pub const ENV_FORCE_AVX2: &str = "FERROUS_BYTESUM_FORCE_AVX2";
