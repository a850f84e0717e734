//! Connection descriptor for the backing store.

use crate::error::{CatalogError, CatalogResult};

/// Environment variables consulted by [`DatabaseConfig::from_env`], in order.
pub const URL_ENV_VARS: &[&str] = &["CATALOG_DATABASE_URL", "DATABASE_URL"];

/// Where the catalog store lives.
///
/// Passed explicitly to [`crate::connect`]; nothing in the crate keeps a
/// process-wide connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
}

impl DatabaseConfig {
    /// Create a config from a PostgreSQL connection URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Load the URL from `.env` / the process environment.
    ///
    /// `CATALOG_DATABASE_URL` wins over `DATABASE_URL`.
    pub fn from_env() -> CatalogResult<Self> {
        dotenvy::dotenv().ok();

        for key in URL_ENV_VARS {
            if let Ok(url) = std::env::var(key) {
                return Self::new(url).validated();
            }
        }

        Err(CatalogError::config(format!(
            "none of {} is set",
            URL_ENV_VARS.join(", ")
        )))
    }

    /// The connection URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reject blank URLs early; everything else is left to the driver.
    pub fn validated(self) -> CatalogResult<Self> {
        if self.url.trim().is_empty() {
            return Err(CatalogError::config("database url must not be empty"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::DatabaseConfig;

    #[test]
    fn blank_url_is_rejected() {
        let err = DatabaseConfig::new("   ").validated().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: database url must not be empty"
        );
    }

    #[test]
    fn url_is_kept_verbatim() {
        let config = DatabaseConfig::new("postgres://localhost/catalog")
            .validated()
            .unwrap();
        assert_eq!(config.url(), "postgres://localhost/catalog");
    }
}
