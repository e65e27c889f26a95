pub mod affine;
pub mod caesar;
pub mod scytale;
pub mod substitution;

pub use affine::*;
pub use caesar::*;
pub use scytale::*;
pub use substitution::*;
