pub mod conference;
pub mod paper;

pub use conference::*;
pub use paper::*;
