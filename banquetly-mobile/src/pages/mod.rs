//! Mobile UI pages

pub mod account;
pub mod home;
pub mod my_shifts;
pub mod shift_details;
