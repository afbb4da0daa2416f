pub mod catalog;
pub mod checks;
pub mod eval;
pub mod evidence;
pub mod patterns;
pub mod select;
