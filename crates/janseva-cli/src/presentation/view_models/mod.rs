mod common;
mod complaint;
mod department;
mod result;

pub use common::*;
pub use complaint::*;
pub use department::*;
pub use result::*;
