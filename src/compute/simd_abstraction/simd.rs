//! Module for runtime SIMD engine detection and management.
//!
//! Detects the widest SIMD engine the CPU supports and exposes metadata
//! (descriptions, lane counts) used by dispatch and logging.

#[cfg(target_arch = "x86_64")]
use crate::defaults;

/// Available SIMD engine types based on CPU capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdEngineType {
    /// 128-bit SIMD (SSE2/NEON) - always available on x86_64 and aarch64
    Engine128,
    /// 256-bit SIMD (AVX2) - x86_64 only
    #[cfg(target_arch = "x86_64")]
    Engine256,
    /// 512-bit SIMD (AVX-512BW) - x86_64 only (requires avx512 feature flag)
    #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
    Engine512,
}

#[cfg(target_arch = "x86_64")]
fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Detects the optimal SIMD engine based on CPU features
///
/// Environment variable overrides for testing/debugging (x86_64 only):
/// - `FERROUS_BYTESUM_FORCE_SSE=1`: Force the 128-bit engine (skip AVX2/AVX-512)
/// - `FERROUS_BYTESUM_FORCE_AVX2=1`: Force the 256-bit engine (skip AVX-512)
pub fn detect_optimal_simd_engine() -> SimdEngineType {
    #[cfg(target_arch = "x86_64")]
    {
        if env_flag(defaults::ENV_FORCE_SSE) {
            log::info!("{}=1: Using SSE (128-bit) engine", defaults::ENV_FORCE_SSE);
            return SimdEngineType::Engine128;
        }

        #[cfg(feature = "avx512")]
        {
            let force_avx2 = env_flag(defaults::ENV_FORCE_AVX2);
            if !force_avx2 && is_x86_feature_detected!("avx512bw") {
                return SimdEngineType::Engine512;
            }
            if force_avx2 {
                log::info!("{}=1: Using AVX2 (256-bit) engine", defaults::ENV_FORCE_AVX2);
            }
        }

        if is_x86_feature_detected!("avx2") {
            return SimdEngineType::Engine256;
        }

        // SSE2 is part of the x86_64 baseline
        SimdEngineType::Engine128
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        SimdEngineType::Engine128
    }
}

/// Whether the engine can run on this CPU.
///
/// `Engine128` has no implementation outside x86_64/aarch64; callers fall back
/// to a portable kernel there.
pub fn is_engine_available(engine: SimdEngineType) -> bool {
    match engine {
        SimdEngineType::Engine128 => cfg!(any(target_arch = "x86_64", target_arch = "aarch64")),
        #[cfg(target_arch = "x86_64")]
        SimdEngineType::Engine256 => is_x86_feature_detected!("avx2"),
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        SimdEngineType::Engine512 => is_x86_feature_detected!("avx512bw"),
    }
}

/// Returns a human-readable description of the SIMD engine
pub fn simd_engine_description(engine: SimdEngineType) -> &'static str {
    match engine {
        SimdEngineType::Engine128 => {
            #[cfg(target_arch = "x86_64")]
            {
                "SSE2 (128-bit, 16 bytes per load)"
            }
            #[cfg(not(target_arch = "x86_64"))]
            {
                "NEON (128-bit, 16 bytes per load)"
            }
        }
        #[cfg(target_arch = "x86_64")]
        SimdEngineType::Engine256 => "AVX2 (256-bit, 32 bytes per load)",
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        SimdEngineType::Engine512 => "AVX-512BW (512-bit, 64 bytes per load)",
    }
}

/// Number of byte lanes processed per vector load.
pub fn engine_lanes(engine: SimdEngineType) -> usize {
    match engine {
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        SimdEngineType::Engine512 => 64,
        #[cfg(target_arch = "x86_64")]
        SimdEngineType::Engine256 => 32,
        SimdEngineType::Engine128 => 16,
    }
}

/// Every engine variant compiled into this build, narrowest first.
pub fn compiled_engines() -> Vec<SimdEngineType> {
    #[allow(unused_mut)]
    let mut engines = vec![SimdEngineType::Engine128];
    #[cfg(target_arch = "x86_64")]
    engines.push(SimdEngineType::Engine256);
    #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
    engines.push(SimdEngineType::Engine512);
    engines
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test runtime SIMD engine detection
    #[test]
    fn test_simd_engine_detection() {
        let engine = detect_optimal_simd_engine();
        let description = simd_engine_description(engine);

        println!("Detected SIMD engine: {:?}", engine);
        println!("Description: {}", description);

        #[cfg(target_arch = "x86_64")]
        {
            if std::env::var(defaults::ENV_FORCE_SSE).is_err()
                && std::env::var(defaults::ENV_FORCE_AVX2).is_err()
            {
                if is_x86_feature_detected!("avx512bw") && cfg!(feature = "avx512") {
                    #[cfg(feature = "avx512")]
                    assert_eq!(engine, SimdEngineType::Engine512);
                } else if is_x86_feature_detected!("avx2") {
                    assert_eq!(engine, SimdEngineType::Engine256);
                } else {
                    assert_eq!(engine, SimdEngineType::Engine128);
                }
            }
        }

        #[cfg(not(target_arch = "x86_64"))]
        {
            assert_eq!(engine, SimdEngineType::Engine128);
        }
    }

    #[test]
    fn test_detected_engine_is_available() {
        let engine = detect_optimal_simd_engine();
        if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
            assert!(is_engine_available(engine));
        }
    }

    #[test]
    fn test_engine_lanes_grow_with_width() {
        let lanes: Vec<usize> = compiled_engines().into_iter().map(engine_lanes).collect();
        assert_eq!(lanes[0], 16);
        assert!(lanes.windows(2).all(|w| w[0] < w[1]));
    }
}
