//! Low-level numeric building blocks.
//!
//! - [`word`] defines the machine word abstraction the whole crate is
//!   generic over (16- and 32-bit digits).
//! - [`mp`] implements multi-precision arithmetic on word slices,
//!   including the two Barrett reduction variants.
//! - [`uint`] wraps a fixed word array into the [`UInt`] value type with
//!   big-endian byte and hex conversions.

pub mod mp;
pub mod uint;
pub mod word;

pub use uint::UInt;
pub use word::Word;
