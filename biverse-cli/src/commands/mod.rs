//! Command implementations

mod books;
mod show;

pub use books::books;
pub use show::show;
