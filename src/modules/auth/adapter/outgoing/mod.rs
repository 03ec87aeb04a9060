pub mod google_identity_provider;
pub mod jwt;

pub use google_identity_provider::GoogleIdentityProvider;
