//! One-time SIMD capability probe.
//!
//! The build script selects at most one instruction-set family per build
//! (`sse`, `neon` or `fallback` cfg). At runtime the probe confirms the CPU
//! actually carries the feature the build assumed, caches the answer for the
//! process lifetime, and exposes it read-only. The kernels themselves only
//! consume the boolean; the ISA tag exists for diagnostics and test gating.

use std::sync::OnceLock;

/// Instruction-set family the running process can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isa {
    /// No SIMD; every operation runs the scalar kernels.
    None,
    /// x86/x86_64 with SSE4.1-class 128-bit vectors.
    X86Sse41,
    /// 32-bit ARM with NEON 64-bit d-register vectors.
    NeonV7,
    /// AArch64 with NEON 128-bit q-register vectors.
    NeonV8,
}

/// Process-wide SIMD capability, computed once and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Whether the dispatcher may select SIMD kernels at all.
    pub simd_available: bool,
    /// Which family the build and CPU agree on.
    pub isa: Isa,
}

impl Capability {
    /// Tag string identifying the detected family, for diagnostics.
    pub fn isa_tag(&self) -> &'static str {
        match self.isa {
            Isa::None => "none",
            Isa::X86Sse41 => "x86_64",
            Isa::NeonV7 => "armv7l",
            Isa::NeonV8 => "aarch64",
        }
    }

    fn detect() -> Self {
        let isa = detect_isa();
        Capability {
            simd_available: isa != Isa::None,
            isa,
        }
    }
}

#[cfg(all(sse, any(target_arch = "x86", target_arch = "x86_64")))]
fn detect_isa() -> Isa {
    // The build assumed SSE4.1; confirm before letting the dispatcher use it.
    if is_x86_feature_detected!("sse4.1") {
        Isa::X86Sse41
    } else {
        Isa::None
    }
}

#[cfg(all(neon, target_arch = "aarch64"))]
fn detect_isa() -> Isa {
    if std::arch::is_aarch64_feature_detected!("neon") {
        Isa::NeonV8
    } else {
        Isa::None
    }
}

#[cfg(all(neon, target_arch = "arm"))]
fn detect_isa() -> Isa {
    // No stable runtime probe on 32-bit ARM; the build script only emits the
    // `neon` cfg after finding the feature in /proc/cpuinfo.
    Isa::NeonV7
}

#[cfg(not(any(
    all(sse, any(target_arch = "x86", target_arch = "x86_64")),
    all(neon, target_arch = "aarch64"),
    all(neon, target_arch = "arm"),
)))]
fn detect_isa() -> Isa {
    Isa::None
}

/// Returns the cached capability, probing on first call.
pub fn capability() -> &'static Capability {
    static CAPABILITY: OnceLock<Capability> = OnceLock::new();
    CAPABILITY.get_or_init(Capability::detect)
}
