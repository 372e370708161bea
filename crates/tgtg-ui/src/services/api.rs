//! HTTP form transport backed by `gloo-net`.

use crate::core::submit::{Encoding, FormTransport, OutboundRequest, SubmitError};
use gloo::console;
use gloo_net::http::Request;
use web_sys::FormData;

#[derive(Clone, Debug)]
pub(crate) struct GlooTransport {
    pub(crate) base_url: String,
}

impl GlooTransport {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl FormTransport for GlooTransport {
    async fn post(&self, request: &OutboundRequest) -> Result<String, SubmitError> {
        let endpoint = request.endpoint;
        let mut req = Request::post(&request.url(&self.base_url));
        if let Some(content_type) = request.encoding.content_type() {
            req = req.header("Content-Type", content_type);
        }
        let req = match request.encoding {
            Encoding::Multipart => req.body(multipart_body(request)?),
            Encoding::UrlEncoded => req.body(request.fields.to_urlencoded()),
        };
        let response = req
            .send()
            .await
            .map_err(|err| transport_error(endpoint, &err.to_string()))?;
        response
            .text()
            .await
            .map_err(|err| transport_error(endpoint, &err.to_string()))
    }
}

fn multipart_body(request: &OutboundRequest) -> Result<FormData, SubmitError> {
    let form =
        FormData::new().map_err(|err| transport_error(request.endpoint, &format!("{err:?}")))?;
    for (name, value) in request.fields.iter() {
        form.append_with_str(name, value)
            .map_err(|err| transport_error(request.endpoint, &format!("{err:?}")))?;
    }
    Ok(form)
}

fn transport_error(endpoint: &'static str, detail: &str) -> SubmitError {
    console::error!("form request failed", endpoint, detail);
    SubmitError::Transport {
        endpoint,
        detail: detail.to_string(),
    }
}
