pub mod swiss;

pub use swiss::swiss_pairings;
