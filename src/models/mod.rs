mod commit;
mod tag;

pub use commit::*;
pub use tag::*;
