pub mod pair;
pub mod table;
pub mod value;
