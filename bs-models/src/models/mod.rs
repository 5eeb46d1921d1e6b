//! Resource model definitions.

pub mod attachment;
pub mod book;
pub mod chapter;
pub mod common;
mod de;
pub mod page;
pub mod recycle_bin;
pub mod search;
pub mod shelf;
pub mod user;
