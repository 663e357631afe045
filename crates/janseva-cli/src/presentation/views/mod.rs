mod complaint;
mod department;

pub use complaint::*;
pub use department::*;
