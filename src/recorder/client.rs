use crate::app_config::AppConfig;
use crate::recorder::RecorderError;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};

pub fn new_client(config: &AppConfig) -> Result<Client, RecorderError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::USER_AGENT, HeaderValue::from_str(&format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))?);

    let client = Client::builder()
        .danger_accept_invalid_certs(config.recorder().accept_invalid_certs())
        .timeout(config.recorder().request_timeout())
        .default_headers(headers)
        .build()?;
    Ok(client)
}
