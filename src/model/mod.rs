pub mod common;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use common::*;
pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;
