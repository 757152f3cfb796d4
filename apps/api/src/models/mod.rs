pub mod persona;
pub mod resume;
