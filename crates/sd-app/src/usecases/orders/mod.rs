pub mod lookup;

pub use lookup::{LookupOrder, OrderQuery};
