pub mod fighters;
pub mod fights;
pub mod rankings;
