mod query;
mod record;
mod response;
mod result;

pub use query::*;
pub use record::*;
pub use response::*;
pub use result::*;
