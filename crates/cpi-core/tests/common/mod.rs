//! Stub bridges shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cpi_core::{Bridge, TransportError};
use serde_json::{Value, json};

/// A bridge that records every call and answers with a fixed response.
#[derive(Clone)]
pub struct RecordingBridge {
    calls: Arc<Mutex<Vec<Value>>>,
    response: Value,
}

impl RecordingBridge {
    pub fn new(response: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    /// A response that fits every operation's result shape with one status.
    pub fn accepting_everything() -> Self {
        Self::new(json!({
            "success": true,
            "object": {},
            "objects": [],
            "count": 0,
            "page": 0,
            "result": [{"id": "1", "status": "updated", "message": ""}],
            "id": "1",
            "status": "added",
            "message": "",
            "value": ""
        }))
    }

    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }

    pub fn functions(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| c["function"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

#[async_trait]
impl Bridge for RecordingBridge {
    async fn call(&self, params: Value) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(params);
        Ok(self.response.clone())
    }
}

/// A bridge that projects a fixed set of records onto the requested fields.
pub struct ProjectingBridge {
    pub records: Vec<Value>,
}

#[async_trait]
impl Bridge for ProjectingBridge {
    async fn call(&self, params: Value) -> Result<Value, TransportError> {
        let fields: Vec<&str> = params["fields"]
            .as_array()
            .map(|f| f.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let objects: Vec<Value> = self
            .records
            .iter()
            .map(|record| {
                let projected: serde_json::Map<String, Value> = record
                    .as_object()
                    .into_iter()
                    .flatten()
                    .filter(|(k, _)| fields.contains(&k.as_str()))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Value::Object(projected)
            })
            .collect();

        Ok(json!({
            "success": true,
            "objects": objects,
            "count": self.records.len(),
            "page": params["page"].as_u64().unwrap_or(0)
        }))
    }
}

/// A bridge answering one status per submitted object, echoing their order.
pub struct StatusEchoBridge;

#[async_trait]
impl Bridge for StatusEchoBridge {
    async fn call(&self, params: Value) -> Result<Value, TransportError> {
        let result: Vec<Value> = params["objects"]
            .as_array()
            .map(|objects| {
                objects
                    .iter()
                    .enumerate()
                    .map(|(i, o)| {
                        let failed = o.get("Fail").and_then(Value::as_bool).unwrap_or(false);
                        let message = if failed {
                            format!("object {} rejected", i)
                        } else {
                            String::new()
                        };
                        json!({
                            "id": o["UUID"].as_str().unwrap_or_default(),
                            "status": if failed { "failed" } else { "updated" },
                            "message": message
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(json!({"success": true, "result": result}))
    }
}
