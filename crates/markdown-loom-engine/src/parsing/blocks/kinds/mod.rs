pub mod block_quote;
pub mod header;
pub mod list;
pub mod rule;

pub use block_quote::BlockQuote;
pub use header::{Header, HeaderSig};
pub use list::ListMarker;
pub use rule::Rule;
