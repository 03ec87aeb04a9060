mod sign_in;
mod sign_out;

pub use sign_in::*;
pub use sign_out::*;
