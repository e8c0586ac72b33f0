mod encoding;
mod outpoint;
mod script;
mod txo;

pub use encoding::*;
pub use outpoint::*;
pub use script::*;
pub use txo::*;
