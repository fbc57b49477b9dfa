pub mod i18n;
pub mod wave;

pub use wave::*;
