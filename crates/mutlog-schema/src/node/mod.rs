mod field;
mod record;
mod schema;
mod ty;

pub use field::*;
pub use record::*;
pub use schema::*;
pub use ty::*;
