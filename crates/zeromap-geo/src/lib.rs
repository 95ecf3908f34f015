//! Address resolution for zeromap.
//!
//! Turns free-text Korean addresses into WGS-84 coordinates through an
//! ordered chain of tiers: the Kakao local API, an optional server-side
//! relay, and finally a static district-centroid table that cannot fail.
//! The chain swallows per-tier failures and falls through, so callers get
//! a best-effort coordinate instead of an error dialog. Reverse geocoding
//! and great-circle distance helpers round out the crate.

pub mod distance;
pub mod district;
mod error;
pub mod kakao;
pub mod relay;
pub mod resolver;
mod retry;
mod types;

pub use error::GeoError;
pub use kakao::KakaoClient;
pub use relay::RelayClient;
pub use resolver::{ResolverChain, ResolverTier};
