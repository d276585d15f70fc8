mod cut;
mod extract;
mod paste;

pub use cut::Cut;
pub use extract::Extract;
pub use paste::Paste;
