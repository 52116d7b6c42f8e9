//! Card locations outside of hands.
//!
//! The `Field` owns the draw pile, every player's played pile, and the
//! reserved reincarnation card. Hands are owned by `PlayerState`.

mod field;

pub use field::Field;
