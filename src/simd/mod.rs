//! SIMD backends.
//!
//! One module per instruction-set family, each providing one vector wrapper
//! type per element type. The build script's cfg flag decides which module
//! is compiled; [`scalar`] is always present as the one-lane fallback and
//! as the backend for element types the active ISA has no vectors for.

pub mod scalar;
pub mod vec;

#[cfg(sse)]
pub mod x86;

#[cfg(all(neon, target_arch = "aarch64"))]
pub mod neon;

#[cfg(all(neon, target_arch = "arm"))]
pub mod neon32;
