pub mod hit_testing;

pub use hit_testing::{hit_test, topmost_hit};
