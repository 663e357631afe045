pub mod complaint;
pub mod department;
