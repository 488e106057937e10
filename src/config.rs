//! Environment detection and endpoint configuration.
//!
//! The same pages are served locally, on the beta host, and in production;
//! behavior differences hang off the hostname the page was loaded from.

/// Base URL used when developing against a local static server.
const LOCAL_BASE_URL: &str = "http://127.0.0.1:8000";

/// Deployment environment, classified from the page hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Localhost development server.
    Local,
    /// The beta host.
    Development,
    /// The live site.
    Production,
}

impl Environment {
    /// Classifies a hostname (with or without a port).
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_core::config::Environment;
    ///
    /// assert_eq!(Environment::from_hostname("localhost:8000"), Environment::Local);
    /// assert_eq!(Environment::from_hostname("beta.shop.example"), Environment::Development);
    /// assert_eq!(Environment::from_hostname("www.shop.example"), Environment::Production);
    /// ```
    pub fn from_hostname(hostname: &str) -> Self {
        if hostname == "localhost"
            || hostname == "127.0.0.1"
            || hostname.starts_with("localhost:")
            || hostname.starts_with("127.0.0.1:")
        {
            return Environment::Local;
        }
        let bare = hostname.strip_prefix("www.").unwrap_or(hostname);
        if bare.starts_with("beta.") {
            return Environment::Development;
        }
        Environment::Production
    }

    /// Lowercase name, as sent to the checkout provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

/// Resolved page configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    environment: Environment,
    base_url: String,
    checkout_endpoint: Option<String>,
}

impl Config {
    /// Resolves configuration for a page served from `hostname` with the
    /// given origin. Local development uses a fixed dev-server base URL;
    /// everything else stays on the page's own origin.
    pub fn for_host(hostname: &str, origin: &str) -> Self {
        let environment = Environment::from_hostname(hostname);
        let base_url = match environment {
            Environment::Local => LOCAL_BASE_URL.to_string(),
            _ => origin.trim_end_matches('/').to_string(),
        };
        Self {
            environment,
            base_url,
            checkout_endpoint: None,
        }
    }

    /// Sets the checkout provider endpoint URL.
    pub fn with_checkout_endpoint(mut self, url: impl Into<String>) -> Self {
        self.checkout_endpoint = Some(url.into());
        self
    }

    /// The classified environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base URL for same-site links.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The checkout provider endpoint, if configured.
    pub fn checkout_endpoint(&self) -> Option<&str> {
        self.checkout_endpoint.as_deref()
    }

    /// Returns `true` when a usable checkout endpoint is configured.
    ///
    /// Deployments that never replaced the `YOUR_...` placeholder from the
    /// setup instructions count as unconfigured.
    pub fn checkout_configured(&self) -> bool {
        match &self.checkout_endpoint {
            Some(url) => !url.is_empty() && !url.contains("YOUR_"),
            None => false,
        }
    }
}
