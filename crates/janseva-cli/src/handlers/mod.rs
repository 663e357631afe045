pub mod complaint;
pub mod department;
pub mod notice;
pub mod personnel;
