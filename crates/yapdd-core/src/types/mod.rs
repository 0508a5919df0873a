mod priority;
mod record;
mod response;

pub use priority::*;
pub use record::*;
pub use response::*;
