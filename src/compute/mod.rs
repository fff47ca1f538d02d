//! # Kernel Selection and Dispatch
//!
//! This module is the single routing point between a reduction request and
//! the kernel that executes it.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                           KernelKind::sum                            │
//! │                                                                      │
//! │  Auto ──resolve()──► Simd(detected engine)                           │
//! │  Scalar / Pointer         portable reference kernels                 │
//! │  Unrolled8 / Unrolled16   independent accumulators                   │
//! │  Swar                     u64 word folding                           │
//! │  Assembly                 inline asm loop (x86_64, aarch64)          │
//! │  Simd(engine)             SSE2/NEON, AVX2, AVX-512BW                 │
//! │                           └─ falls back to Swar if CPU lacks engine  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The kernel choice affects speed only; every variant returns the same sum.

pub mod simd_abstraction;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::kernels;
use simd_abstraction::simd::{
    compiled_engines, detect_optimal_simd_engine, is_engine_available, simd_engine_description,
    SimdEngineType,
};

/// A byte-sum kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelKind {
    /// Widest SIMD engine detected at runtime.
    #[default]
    Auto,
    /// Iterator sum; the correctness reference and portable fallback.
    Scalar,
    /// Raw pointer walk.
    Pointer,
    /// 8-way unrolled loop.
    Unrolled8,
    /// 16-way unrolled loop.
    Unrolled16,
    /// SIMD within a register over u64 words.
    Swar,
    /// Inline assembly byte loop.
    Assembly,
    /// Explicit SIMD engine.
    Simd(SimdEngineType),
}

impl KernelKind {
    /// Replace `Auto` with a concrete kernel for this host.
    ///
    /// Detection runs once per process; later changes to the
    /// `FERROUS_BYTESUM_FORCE_*` variables are not observed.
    pub fn resolve(self) -> KernelKind {
        static AUTO: OnceLock<KernelKind> = OnceLock::new();

        match self {
            KernelKind::Auto => *AUTO.get_or_init(|| {
                let engine = detect_optimal_simd_engine();
                if is_engine_available(engine) {
                    KernelKind::Simd(engine)
                } else {
                    log::debug!("No SIMD engine available, using scalar kernel");
                    KernelKind::Scalar
                }
            }),
            other => other,
        }
    }

    /// Sum every byte of `data`.
    #[inline]
    pub fn sum(self, data: &[u8]) -> u64 {
        match self {
            KernelKind::Auto => self.resolve().sum(data),
            KernelKind::Scalar => kernels::sum_scalar(data),
            KernelKind::Pointer => kernels::sum_pointer(data),
            KernelKind::Unrolled8 => kernels::sum_unrolled8(data),
            KernelKind::Unrolled16 => kernels::sum_unrolled16(data),
            KernelKind::Swar => kernels::sum_swar(data),
            KernelKind::Assembly => kernels::sum_asm(data),
            KernelKind::Simd(engine) => kernels::sum_with_engine(engine, data),
        }
    }

    /// Short identifier, also accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            KernelKind::Auto => "auto",
            KernelKind::Scalar => "scalar",
            KernelKind::Pointer => "pointer",
            KernelKind::Unrolled8 => "unrolled8",
            KernelKind::Unrolled16 => "unrolled16",
            KernelKind::Swar => "swar",
            KernelKind::Assembly => "asm",
            KernelKind::Simd(SimdEngineType::Engine128) => {
                if cfg!(target_arch = "aarch64") {
                    "neon"
                } else {
                    "sse"
                }
            }
            #[cfg(target_arch = "x86_64")]
            KernelKind::Simd(SimdEngineType::Engine256) => "avx2",
            #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
            KernelKind::Simd(SimdEngineType::Engine512) => "avx512",
        }
    }

    /// Human-readable description for logs.
    pub fn description(self) -> &'static str {
        match self {
            KernelKind::Auto => "auto-detected SIMD engine",
            KernelKind::Scalar => "scalar iterator",
            KernelKind::Pointer => "scalar pointer walk",
            KernelKind::Unrolled8 => "8-way unrolled loop",
            KernelKind::Unrolled16 => "16-way unrolled loop",
            KernelKind::Swar => "SWAR u64 word folding",
            KernelKind::Assembly => {
                if kernels::asm::has_native_asm() {
                    "inline assembly loop"
                } else {
                    "inline assembly loop (scalar on this target)"
                }
            }
            KernelKind::Simd(engine) => simd_engine_description(engine),
        }
    }

    /// Every concrete kernel that can run on this host.
    pub fn all_available() -> Vec<KernelKind> {
        let mut kinds = vec![
            KernelKind::Scalar,
            KernelKind::Pointer,
            KernelKind::Unrolled8,
            KernelKind::Unrolled16,
            KernelKind::Swar,
            KernelKind::Assembly,
        ];
        kinds.extend(
            compiled_engines()
                .into_iter()
                .filter(|&e| is_engine_available(e))
                .map(KernelKind::Simd),
        );
        kinds
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(KernelKind::Auto),
            "scalar" => Ok(KernelKind::Scalar),
            "pointer" => Ok(KernelKind::Pointer),
            "unrolled8" | "unrolled" => Ok(KernelKind::Unrolled8),
            "unrolled16" => Ok(KernelKind::Unrolled16),
            "swar" => Ok(KernelKind::Swar),
            "asm" | "assembly" => Ok(KernelKind::Assembly),
            "simd" => Ok(KernelKind::Simd(detect_optimal_simd_engine())),
            "sse" | "neon" | "simd128" => Ok(KernelKind::Simd(SimdEngineType::Engine128)),
            #[cfg(target_arch = "x86_64")]
            "avx2" | "simd256" => Ok(KernelKind::Simd(SimdEngineType::Engine256)),
            #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
            "avx512" | "simd512" => Ok(KernelKind::Simd(SimdEngineType::Engine512)),
            other => Err(format!("Unknown kernel: {}", other)),
        }
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_to_concrete_kernel() {
        let resolved = KernelKind::Auto.resolve();
        assert_ne!(resolved, KernelKind::Auto);
        println!("Auto kernel: {} ({})", resolved, resolved.description());
    }

    #[test]
    fn test_auto_resolution_is_cached() {
        let first = KernelKind::Auto.resolve();
        for _ in 0..1000 {
            assert_eq!(KernelKind::Auto.resolve(), first);
        }
        assert_eq!(KernelKind::Swar.resolve(), KernelKind::Swar);
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(KernelKind::default(), KernelKind::Auto);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for kind in KernelKind::all_available() {
            let parsed: KernelKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kernel_rejected() {
        let err = "gpu".parse::<KernelKind>().unwrap_err();
        assert!(err.contains("gpu"));
    }

    #[test]
    fn test_all_available_contains_reference() {
        let kinds = KernelKind::all_available();
        assert!(kinds.contains(&KernelKind::Scalar));
        assert!(!kinds.contains(&KernelKind::Auto));
    }
}
