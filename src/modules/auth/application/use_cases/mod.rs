pub mod admin_sign_in;
pub mod admin_sign_out;
