use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{
    Client, Method,
    header::{ACCEPT, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};
use url::Url;

use super::{
    CallContext, Tool, ToolDefinition,
    binder::{arguments_object, bind},
    params::{Param, ParamLocation, input_schema, render_value},
};
use crate::{error::ToolError, models::ApiError};

/// Shared handle on the external abuse API.
/// Cloning is cheap; all tools share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::with_client(Client::new(), Url::parse(base_url)?))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` (with `{name}` placeholders) against the base URL.
    fn endpoint_url(&self, path: &str, fields: &Map<String, Value>) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ToolError::RequestConstruction(format!(
                    "base URL {} cannot carry a path",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();
            for segment in path.trim_start_matches('/').split('/') {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => {
                        let value = fields.get(name).and_then(render_value).ok_or_else(|| {
                            ToolError::RequestConstruction(format!(
                                "missing path parameter `{name}`"
                            ))
                        })?;
                        // `url` collapses dot segments, which would address another resource.
                        if matches!(value.as_str(), "" | "." | "..") {
                            return Err(ToolError::RequestConstruction(format!(
                                "invalid value {value:?} for path parameter `{name}`"
                            )));
                        }
                        segments.push(&value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        Ok(url)
    }

    /// Sends one request and returns the status and the raw body.
    pub async fn execute(
        &self,
        call: PreparedCall,
    ) -> Result<(reqwest::StatusCode, String), ToolError> {
        info!("Abuse API Request: {} {}", call.method, call.url);

        let mut request = self
            .client
            .request(call.method, call.url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = &call.body {
            debug!("Abuse API Request body: {}", body);
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!("Abuse API Response: {}", status);
        Ok((status, body))
    }
}

/// Method, path and parameter table of one API operation.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub params: &'static [Param],
}

/// Fully resolved outbound request, before anything hits the network.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCall {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

/// A tool that binds its arguments to `Req`, performs exactly one HTTP call
/// and renders the response as `Resp`.
pub struct HttpTool<Req, Resp> {
    endpoint: Endpoint,
    api: ApiClient,
    _schema: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> HttpTool<Req, Resp>
where
    Req: DeserializeOwned + Serialize,
    Resp: DeserializeOwned + Serialize,
{
    pub fn new(endpoint: Endpoint, api: ApiClient) -> Self {
        Self {
            endpoint,
            api,
            _schema: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Binds `arguments` and lays the bound fields out over path, query and body.
    pub fn prepare(&self, arguments: Value) -> Result<PreparedCall, ToolError> {
        let arguments = arguments_object(arguments)?;
        let request: Req = bind(arguments)?;
        let fields = match serde_json::to_value(&request) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                return Err(ToolError::RequestConstruction(format!(
                    "request schema serialized to {other} instead of an object"
                )));
            }
            Err(error) => return Err(ToolError::RequestConstruction(error.to_string())),
        };

        let mut url = self.api.endpoint_url(self.endpoint.path, &fields)?;
        let query = query_string(self.endpoint.params, &fields);
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let body = self.has_body().then(|| {
            let body: Map<String, Value> = fields
                .into_iter()
                .filter(|(name, _)| self.location_of(name) == Some(ParamLocation::Body))
                .collect();
            Value::Object(body)
        });

        Ok(PreparedCall {
            method: self.endpoint.method.clone(),
            url,
            body,
        })
    }

    fn has_body(&self) -> bool {
        self.endpoint
            .params
            .iter()
            .any(|param| param.location == ParamLocation::Body)
    }

    fn location_of(&self, name: &str) -> Option<ParamLocation> {
        self.endpoint
            .params
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.location)
    }

    /// Renders a successful response body.
    /// A body that doesn't decode as `Resp` is passed through as-is.
    fn render(&self, body: String) -> Result<String, ToolError> {
        match decode::<Resp>(&body) {
            Ok(response) => serde_json::to_string_pretty(&response).map_err(ToolError::Encoding),
            Err(error) => {
                warn!(
                    tool = self.endpoint.name,
                    %error,
                    "response did not match the expected schema, returning raw body"
                );
                Ok(body)
            }
        }
    }
}

#[async_trait]
impl<Req, Resp> Tool for HttpTool<Req, Resp>
where
    Req: DeserializeOwned + Serialize + Send + 'static,
    Resp: DeserializeOwned + Serialize + Send + 'static,
{
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.endpoint.name.to_string(),
            description: self.endpoint.description.to_string(),
            input_schema: input_schema(self.endpoint.params),
        }
    }

    #[tracing::instrument(skip_all, fields(tool, request_id))]
    async fn call(&self, ctx: &CallContext, arguments: Value) -> Result<String, ToolError> {
        let span = tracing::Span::current();
        span.record("tool", self.endpoint.name);
        if let Some(request_id) = &ctx.request_id {
            span.record("request_id", request_id.as_str());
        }

        let call = self.prepare(arguments)?;
        let (status, body) = self.api.execute(call).await?;

        if status.as_u16() >= 400 {
            match ApiError::parse(&body) {
                Some(api_error) => warn!(%status, code = %api_error.code, "Abuse API rejected call"),
                None => warn!(%status, "Abuse API returned an error"),
            }
            return Err(ToolError::Upstream { status, body });
        }

        self.render(body)
    }
}

/// Joins the query parameters present in `fields`, in parameter-table order.
pub fn query_string(params: &[Param], fields: &Map<String, Value>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for param in params
        .iter()
        .filter(|param| param.location == ParamLocation::Query)
    {
        if let Some(value) = fields.get(param.name).and_then(render_value) {
            query.append_pair(param.name, &value);
        }
    }
    query.finish()
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, String> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let value: T =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| e.to_string())?;
    deserializer.end().map_err(|e| e.to_string())?;
    Ok(value)
}
