use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::models::WorkflowPayload;

// REST API client for the workflow backend
pub struct ApiClient;

impl ApiClient {
    fn api_base_url() -> String {
        super::get_api_base_url()
    }

    /// Fetch all known workflows (id, name and serialized snapshots).
    pub async fn get_workflows() -> Result<String, JsValue> {
        let url = format!("{}/api/workflows", Self::api_base_url());
        Self::fetch_json(&url, "GET", None).await
    }

    /// Create a new workflow record.
    pub async fn create_workflow(
        name: &str,
        nodes_json: &str,
        edges_json: &str,
    ) -> Result<String, JsValue> {
        let url = format!("{}/api/workflows", Self::api_base_url());
        let body = Self::workflow_body(name, nodes_json, edges_json)?;
        Self::fetch_json(&url, "POST", Some(&body)).await
    }

    /// Update an existing workflow record.
    pub async fn update_workflow(
        workflow_id: u32,
        name: &str,
        nodes_json: &str,
        edges_json: &str,
    ) -> Result<String, JsValue> {
        let url = format!("{}/api/workflows/{}", Self::api_base_url(), workflow_id);
        let body = Self::workflow_body(name, nodes_json, edges_json)?;
        Self::fetch_json(&url, "PUT", Some(&body)).await
    }

    /// Trigger a full remote execution of a persisted workflow.  `body` is
    /// the already-encoded `{modelId, initialVariables}` request.
    pub async fn execute_workflow(workflow_id: u32, body: &str) -> Result<String, JsValue> {
        let url = format!(
            "{}/api/workflows/{}/execute-full",
            Self::api_base_url(),
            workflow_id
        );
        Self::fetch_json(&url, "POST", Some(body)).await
    }

    fn workflow_body(name: &str, nodes_json: &str, edges_json: &str) -> Result<String, JsValue> {
        let payload = WorkflowPayload {
            name: name.to_string(),
            nodes_json: nodes_json.to_string(),
            edges_json: edges_json.to_string(),
        };
        serde_json::to_string(&payload)
            .map_err(|e| JsValue::from_str(&format!("Failed to encode workflow body: {}", e)))
    }

    // Helper function to make fetch requests
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        if let Some(data) = body {
            let js_body = JsValue::from_str(data);
            opts.set_body(&js_body);
            headers.append("Content-Type", "application/json")?;
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        // Non-2xx: surface the response body text as the error message so
        // the user sees whatever the backend had to say.
        if !resp.ok() {
            let status = resp.status();
            let body_text = JsFuture::from(resp.text()?)
                .await
                .ok()
                .and_then(|t| t.as_string())
                .unwrap_or_default();
            let message = if body_text.is_empty() {
                format!("HTTP {} {}", status, resp.status_text())
            } else {
                body_text
            };
            return Err(JsValue::from_str(&message));
        }

        // Parse body as text - caller decodes JSON.
        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
