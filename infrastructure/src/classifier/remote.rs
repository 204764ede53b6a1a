//! Classifier backed by a hosted tabular-classification endpoint

use crate::http::body_excerpt;
use async_trait::async_trait;
use early_detect_application::{ClassifierError, DiseaseClassifier, ensure_shape};
use early_detect_domain::{DiseaseLabel, FeatureVector, SchemaDescriptor};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Sends one row per request as `{"inputs": {"data": {feature: [value]}}}`
pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    schema: SchemaDescriptor,
}

impl RemoteClassifier {
    /// `schema` is the column layout the endpoint was trained on.
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: Option<String>,
        schema: SchemaDescriptor,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            schema,
        }
    }
}

/// Build the request payload, one single-element column per feature.
pub(crate) fn request_body(schema: &SchemaDescriptor, vector: &FeatureVector) -> Value {
    let data: Map<String, Value> = schema
        .features
        .iter()
        .zip(vector.values())
        .map(|(name, v)| (name.clone(), json!([v])))
        .collect();
    json!({ "inputs": { "data": data } })
}

/// Extract the first label from the endpoint's response.
///
/// Accepts a bare array (`["Malaria"]`) or a `{"predictions": [...]}` wrapper.
pub(crate) fn parse_prediction(body: &str) -> Result<DiseaseLabel, ClassifierError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ClassifierError::InvalidOutput(format!("not JSON: {}", e)))?;

    let labels = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("predictions") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ClassifierError::InvalidOutput(format!(
                    "unexpected response: {}",
                    body_excerpt(body)
                )));
            }
        },
        _ => {
            return Err(ClassifierError::InvalidOutput(format!(
                "unexpected response: {}",
                body_excerpt(body)
            )));
        }
    };

    let first = labels
        .first()
        .ok_or_else(|| ClassifierError::InvalidOutput("empty prediction list".into()))?;
    let label = match first {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    DiseaseLabel::new(label).map_err(|e| ClassifierError::InvalidOutput(e.to_string()))
}

#[async_trait]
impl DiseaseClassifier for RemoteClassifier {
    fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    async fn predict(&self, vector: &FeatureVector) -> Result<DiseaseLabel, ClassifierError> {
        ensure_shape(&self.schema, vector)?;

        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&request_body(&self.schema, vector));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!("POST {}", self.endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifierError::RequestFailed(e.to_string()))?;

        match status.as_u16() {
            200..=299 => parse_prediction(&body),
            400 | 422 => Err(ClassifierError::Shape(body_excerpt(&body))),
            code => Err(ClassifierError::RequestFailed(format!(
                "HTTP {}: {}",
                code,
                body_excerpt(&body)
            ))),
        }
    }
}
