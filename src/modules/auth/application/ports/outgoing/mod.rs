pub mod admin_allowlist;
pub mod identity_provider;
pub mod token_provider;

pub use admin_allowlist::AdminAllowlist;
pub use identity_provider::{IdentityProvider, IdentityProviderError};
pub use token_provider::{IssuedToken, TokenClaims, TokenError, TokenProvider};
