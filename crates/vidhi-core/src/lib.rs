pub mod catalog;
pub mod law;

pub use catalog::indian_laws;
pub use law::{Category, LawId, LawRecord};
