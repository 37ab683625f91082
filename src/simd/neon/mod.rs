//! AArch64 NEON backends: ten vector types over 128-bit q-registers.
//!
//! NEON is close to a direct fit for this trait: variable shifts take a
//! per-lane signed count (negative shifts right, and the right shift is
//! arithmetic exactly when the element type is signed), and the horizontal
//! reductions are single instructions for every width up to 32 bits. The
//! 64-bit lanes keep a few gaps — no multiply, no min/max, no horizontal
//! fold — which are filled with lane extraction and compare-and-select.

pub mod f32x4;
pub mod f64x2;
pub mod i16x8;
pub mod i32x4;
pub mod i64x2;
pub mod i8x16;
pub mod u16x8;
pub mod u32x4;
pub mod u64x2;
pub mod u8x16;

pub use f32x4::F32x4;
pub use f64x2::F64x2;
pub use i16x8::I16x8;
pub use i32x4::I32x4;
pub use i64x2::I64x2;
pub use i8x16::I8x16;
pub use u16x8::U16x8;
pub use u32x4::U32x4;
pub use u64x2::U64x2;
pub use u8x16::U8x16;
