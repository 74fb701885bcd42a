//! Top-level API client.
//!
//! `ApiClient` owns a `RestClient` and a transport and hands out borrowed,
//! per-resource clients. It holds no mutable state, so sharing it across
//! threads is as safe as the transport it wraps.

use crate::project::ProjectClient;
use crate::rest::RestClient;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    rest: RestClient,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            rest: RestClient::new(base_url),
            transport,
        }
    }

    pub fn project(&self) -> ProjectClient<'_, T> {
        ProjectClient::new(&self.rest, &self.transport)
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(feature = "ureq")]
impl ApiClient<crate::transport::UreqTransport> {
    pub fn from_config(config: &crate::config::ClientConfig) -> Self {
        Self::new(
            &config.base_url,
            crate::transport::UreqTransport::from_config(config),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::{HttpRequest, HttpResponse};
    use crate::project::ProjectInterface;

    struct Echo;

    impl Transport for Echo {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: request.body.clone().unwrap_or_default(),
            })
        }
    }

    #[test]
    fn project_client_shares_base_url_and_transport() {
        let client = ApiClient::new("http://localhost:8080/api/v1/", Echo);
        assert_eq!(client.rest().base_url(), "http://localhost:8080/api/v1");

        let created = client.project().create(&crate::Project::new("echoed")).unwrap();
        assert_eq!(created.name(), "echoed");

        let direct = client
            .transport()
            .execute(&client.rest().get().resource("projects").build().unwrap())
            .unwrap();
        assert_eq!(direct.status, 200);
    }

    #[cfg(feature = "ureq")]
    #[test]
    fn from_config_uses_configured_url() {
        let config = crate::ClientConfig::new("http://localhost:8080");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.rest().base_url(), "http://localhost:8080");
    }
}
