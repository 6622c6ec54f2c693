use reqwest::Client;

/// Keep-alive HTTP client for one `host:port`.
#[derive(Debug, Clone)]
pub struct FileServer {
    pub(crate) origin: String,
    pub(crate) client: Client,
}
