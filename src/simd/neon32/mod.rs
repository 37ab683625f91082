//! ARMv7 NEON backends: vector types over 64-bit d-registers.
//!
//! ARMv7 NEON has no horizontal reduction instructions and no cross-lane
//! min/max, so every horizontal operation is a short chain of pairwise
//! (`vp*`) folds ending in a lane read. It also has no float division; the
//! two-lane f32 divide falls back to lane extraction so the result stays
//! bit-identical to the scalar kernel. The 64-bit element types (i64, u64,
//! f64) have no vectors on this ISA at all and bind to the scalar backend
//! instead, which the dispatcher treats as "no SIMD for this type".

pub mod f32x2;
pub mod i16x4;
pub mod i32x2;
pub mod i8x8;
pub mod u16x4;
pub mod u32x2;
pub mod u8x8;

pub use f32x2::F32x2;
pub use i16x4::I16x4;
pub use i32x2::I32x2;
pub use i8x8::I8x8;
pub use u16x4::U16x4;
pub use u32x2::U32x2;
pub use u8x8::U8x8;
