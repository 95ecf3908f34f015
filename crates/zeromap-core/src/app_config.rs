/// Runtime configuration resolved from environment variables.
///
/// The Kakao key and relay URL are both optional: the resolver chain is
/// assembled from whichever tiers are configured, and the district-table
/// fallback needs no configuration at all.
#[derive(Clone)]
pub struct AppConfig {
    pub kakao_api_key: Option<String>,
    pub relay_url: Option<String>,
    pub http_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    /// Lookups in flight during batch geocoding; `1` means sequential.
    pub batch_concurrency: usize,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "kakao_api_key",
                &self.kakao_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("relay_url", &self.relay_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("batch_concurrency", &self.batch_concurrency)
            .field("log_level", &self.log_level)
            .finish()
    }
}
