//! The ordered resolution chain: provider → relay → district table.
//!
//! Each tier answers `Option<Coordinates>`; the chain takes the first
//! `Some`. Tiers that error are logged and skipped, so a chain ending in
//! the table tier is total. The chain is an explicit value the composition
//! root builds and passes down — there is no hidden global.

use futures::stream::{self, StreamExt};
use zeromap_core::Coordinates;

use crate::district;
use crate::retry::retry_with_backoff;
use crate::{KakaoClient, RelayClient};

const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_BACKOFF_BASE_MS: u64 = 500;

/// One tier of the resolution chain.
pub enum ResolverTier {
    /// Direct Kakao geocoding.
    Provider(KakaoClient),
    /// The server-side relay endpoint.
    Relay(RelayClient),
    /// The static district-centroid table; never declines to answer.
    Table,
}

impl ResolverTier {
    /// Resolves one address, mapping every failure to `None`.
    ///
    /// Transport and decode errors are logged and swallowed here: a tier
    /// that cannot answer is indistinguishable from a tier with no match,
    /// and the chain simply moves on.
    async fn resolve(
        &self,
        address: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Option<Coordinates> {
        let outcome = match self {
            ResolverTier::Provider(client) => {
                retry_with_backoff(max_retries, backoff_base_ms, || {
                    client.address_to_coordinates(address)
                })
                .await
            }
            ResolverTier::Relay(client) => {
                retry_with_backoff(max_retries, backoff_base_ms, || client.resolve(address)).await
            }
            ResolverTier::Table => {
                return Some(district::simple_address_to_coordinates(address));
            }
        };

        match outcome {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(
                    tier = self.name(),
                    address,
                    error = %err,
                    "resolution tier failed"
                );
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ResolverTier::Provider(_) => "provider",
            ResolverTier::Relay(_) => "relay",
            ResolverTier::Table => "table",
        }
    }
}

/// An ordered list of resolution tiers with a shared retry policy.
pub struct ResolverChain {
    tiers: Vec<ResolverTier>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl ResolverChain {
    /// Builds a chain from the given tiers, in resolution order.
    #[must_use]
    pub fn new(tiers: Vec<ResolverTier>) -> Self {
        Self {
            tiers,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        }
    }

    /// Builds a chain that is guaranteed to end in the table tier, making
    /// [`ResolverChain::resolve`] total.
    #[must_use]
    pub fn with_fallback(mut tiers: Vec<ResolverTier>) -> Self {
        if !matches!(tiers.last(), Some(ResolverTier::Table)) {
            tiers.push(ResolverTier::Table);
        }
        Self::new(tiers)
    }

    /// Overrides the retry policy applied to the network tiers.
    #[must_use]
    pub fn retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Resolves an address through the tiers in order; the first answer
    /// wins.
    ///
    /// Total: if every tier declines (possible only for chains built with
    /// [`ResolverChain::new`] and no table tier), the Seoul City Hall
    /// default applies.
    pub async fn resolve(&self, address: &str) -> Coordinates {
        self.try_resolve(address)
            .await
            .unwrap_or(Coordinates::SEOUL_CITY_HALL)
    }

    /// Like [`ResolverChain::resolve`] but `None` when no tier answers,
    /// for callers that want to distinguish "nothing found" from the
    /// default.
    pub async fn try_resolve(&self, address: &str) -> Option<Coordinates> {
        for tier in &self.tiers {
            if let Some(coords) = tier
                .resolve(address, self.max_retries, self.backoff_base_ms)
                .await
            {
                tracing::debug!(
                    tier = tier.name(),
                    address,
                    latitude = coords.latitude,
                    longitude = coords.longitude,
                    "address resolved"
                );
                return Some(coords);
            }
        }
        None
    }

    /// Resolves a batch sequentially.
    ///
    /// The output always has the same length as the input with matching
    /// indices; an address no tier can answer resolves to the fallback
    /// instead of aborting the batch.
    pub async fn resolve_batch(&self, addresses: &[String]) -> Vec<Coordinates> {
        let mut out = Vec::with_capacity(addresses.len());
        for address in addresses {
            out.push(self.resolve(address).await);
        }
        out
    }

    /// Batch resolution with at most `limit` lookups in flight.
    ///
    /// `buffered` yields results in submission order, so the index
    /// correspondence guarantee survives the parallelism. A `limit` of
    /// zero is treated as one.
    pub async fn resolve_batch_concurrent(
        &self,
        addresses: &[String],
        limit: usize,
    ) -> Vec<Coordinates> {
        stream::iter(addresses.iter().map(|address| self.resolve(address)))
            .buffered(limit.max(1))
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn table_only_chain_is_total() {
        let chain = ResolverChain::with_fallback(Vec::new());
        let coords = chain.resolve("부산광역시 해운대구").await;
        assert_eq!(coords, Coordinates::SEOUL_CITY_HALL);
    }

    #[tokio::test]
    async fn with_fallback_appends_exactly_one_table_tier() {
        let chain = ResolverChain::with_fallback(vec![ResolverTier::Table]);
        assert_eq!(chain.tiers.len(), 1);
        let chain = ResolverChain::with_fallback(Vec::new());
        assert_eq!(chain.tiers.len(), 1);
    }

    #[tokio::test]
    async fn empty_chain_without_fallback_returns_none() {
        let chain = ResolverChain::new(Vec::new());
        assert!(chain.try_resolve("서울 마포구 합정동").await.is_none());
        // resolve() still answers something sensible.
        assert_eq!(
            chain.resolve("서울 마포구 합정동").await,
            Coordinates::SEOUL_CITY_HALL
        );
    }

    #[tokio::test]
    async fn batch_length_matches_input_length() {
        let chain = ResolverChain::with_fallback(Vec::new());
        let addresses = vec![
            "서울 마포구 합정동".to_string(),
            String::new(),
            "서울 강남구 역삼동".to_string(),
        ];
        let resolved = chain.resolve_batch(&addresses).await;
        assert_eq!(resolved.len(), addresses.len());
        assert_eq!(resolved[0], district::simple_address_to_coordinates(&addresses[0]));
        assert_eq!(resolved[1], Coordinates::SEOUL_CITY_HALL);
        assert_eq!(resolved[2], district::simple_address_to_coordinates(&addresses[2]));
    }

    #[tokio::test]
    async fn concurrent_batch_preserves_index_order() {
        let chain = ResolverChain::with_fallback(Vec::new());
        let addresses = vec![
            "서울 강남구".to_string(),
            "서울 마포구".to_string(),
            "서울 종로구".to_string(),
            "부산광역시".to_string(),
        ];
        let sequential = chain.resolve_batch(&addresses).await;
        let concurrent = chain.resolve_batch_concurrent(&addresses, 3).await;
        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn zero_concurrency_limit_is_clamped() {
        let chain = ResolverChain::with_fallback(Vec::new());
        let addresses = vec!["서울 마포구".to_string()];
        let resolved = chain.resolve_batch_concurrent(&addresses, 0).await;
        assert_eq!(resolved.len(), 1);
    }
}
