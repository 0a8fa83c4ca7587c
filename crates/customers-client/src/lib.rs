use std::time::Duration;

use anyhow::Context;
use customers_types::domain::customer::{CreateCustomerCommand, Customer};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};

#[derive(Clone)]
pub struct CustomersClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct CustomersClient {
    base: Url,
    client: reqwest::Client,
}

impl CustomersClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<CustomersClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(CustomersClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    pub async fn create_customer(&self, req: CreateCustomerCommand) -> anyhow::Result<Customer> {
        let res = self
            .client
            .post(self.url("customers")?)
            .json(&req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    /// A 204 from the server means the table is empty; decode it as such.
    pub async fn list_customers(&self) -> anyhow::Result<Vec<Customer>> {
        let res = self
            .client
            .get(self.url("customers")?)
            .send()
            .await?
            .error_for_status()?;
        if res.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        Ok(res.json().await?)
    }
}

impl CustomersClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<CustomersClient> {
        if let Some(client) = self.client {
            return Ok(CustomersClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(CustomersClient {
            base: self.base,
            client,
        })
    }
}
