pub mod bbox;
pub mod kind;
