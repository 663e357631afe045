mod complaint;
mod department;
mod directory;

pub use complaint::*;
pub use department::*;
pub use directory::*;
