//! In-memory transport that replays scripted responses and records requests.

#![allow(dead_code)]

use notion_query::{ApiResponse, AppError, Transport};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One request as the database client issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse<String>, AppError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: StatusCode, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            data: body.to_string(),
            status,
            url: "scripted".to_string(),
        }));
        self
    }

    pub fn respond_ok(self, body: Value) -> Self {
        self.respond(StatusCode::OK, body)
    }

    pub fn respond_raw(self, status: StatusCode, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            data: body.to_string(),
            status,
            url: "scripted".to_string(),
        }));
        self
    }

    pub fn fail(self, error: AppError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse<String>, AppError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AppError::MissingConfiguration(
                    "scripted transport ran out of responses".to_string(),
                ))
            })
    }
}

pub fn page_json(id: &str) -> Value {
    serde_json::json!({
        "object": "page",
        "id": id,
        "created_time": "2024-01-01T00:00:00.000Z",
        "last_edited_time": "2024-01-02T00:00:00.000Z",
        "archived": false,
        "properties": {
            "Name": {"id": "title", "type": "title", "title": [
                {"type": "text", "text": {"content": id, "link": null}, "plain_text": id}
            ]}
        }
    })
}

pub fn database_json(id: &str, title: &str) -> Value {
    serde_json::json!({
        "object": "database",
        "id": id,
        "created_time": "2024-01-01T00:00:00.000Z",
        "last_edited_time": "2024-01-02T00:00:00.000Z",
        "title": [{"type": "text", "text": {"content": title, "link": null}, "plain_text": title}],
        "properties": {
            "Name": {"id": "title", "name": "Name", "type": "title", "title": {}}
        }
    })
}
