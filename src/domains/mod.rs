pub mod entities;
pub mod kind;
