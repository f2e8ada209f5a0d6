pub mod error;
pub mod modify;
pub mod query;
pub mod token;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

pub use error::ModError;
pub use modify::{ModifyOptions, apply_mod, modify, modify_all, modify_with};
pub use query::{Modification, Query, split_query};
pub use token::{Init, QueryToken};
pub use value::{Edit, Map, Value};
