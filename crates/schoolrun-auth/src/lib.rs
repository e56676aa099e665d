//! # Schoolrun Auth
//!
//! Stateless bearer-token authentication.
//!
//! - [`claims`]: the [`Claims`] mapping carried in a token payload
//! - [`clock`]: the time source used to stamp and check expiry
//! - [`token`]: the [`TokenService`] issuing and verifying HS256 tokens
//!
//! Tokens are `base64url(header).base64url(claims).base64url(hmac_sha256)`
//! with the header `{"typ":"JWT","alg":"HS256"}`. Expiry is the only way a
//! token stops being valid; there is no revocation list.
//!
//! # Example
//!
//! ```ignore
//! use schoolrun_auth::{Claims, TokenService};
//! use schoolrun_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env()?);
//! let token = tokens.issue(Claims::new(user_uuid, "driver"))?;
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.role(), Some("driver"));
//! ```

pub mod claims;
pub mod clock;
pub mod token;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use token::{INVALID_TOKEN_MESSAGE, TokenService};
