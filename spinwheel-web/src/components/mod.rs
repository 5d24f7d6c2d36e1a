pub mod header;
pub mod result_card;
pub mod setup_notice;
pub mod wheel;

pub use wheel::SpinWheel;
