pub mod title;
pub mod wc;
