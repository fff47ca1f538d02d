//! Input data: owned age buffers, synthetic generators and record layouts.

pub mod buffer;
pub mod layout;

pub use buffer::{average_age, cyclic_sum, AgeBuffer};
pub use layout::{sum_ages_aos, users_synthetic, User, UserSoA};
