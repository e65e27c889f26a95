pub mod affine;
pub mod caesar;
pub mod info;
pub mod scytale;
pub mod substitution;

pub use affine::*;
pub use caesar::*;
pub use info::*;
pub use scytale::*;
pub use substitution::*;
