pub mod resolver;

pub use resolver::{ImageResolver, ImageStrategy, Resolution};
