// Task operations
//
// Task identifiers are numeric; batch tasks are addressed by their
// human-readable name, which must be percent-encoded wherever it lands in a
// path segment.

use eventsource_stream::{Eventsource, EventStreamError};
use futures::{Stream, StreamExt};
use reqwest::multipart;
use serde_json::Value;
use tracing::error;
use urlencoding::encode;

use crate::error::{ApiError, Result};
use crate::models::{ApiResponse, Page, Task, TaskProgress};
use crate::ApiClient;

impl ApiClient {
    /// POST `/api/tasks` with a caller-assembled multipart form (task name,
    /// extraction fields, files). reqwest sets the multipart content type.
    pub async fn create_task(&self, form: multipart::Form) -> Result<ApiResponse<Vec<Task>>> {
        self.send(self.http.post(self.url("/api/tasks")).multipart(form))
            .await
    }

    /// GET `/api/tasks` for one page of a user's tasks. Pagination is
    /// caller-driven and zero-indexed; the backend defaults are page 0,
    /// size 10.
    pub async fn tasks(
        &self,
        user_id: i64,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<ApiResponse<Page<Task>>> {
        let query = [
            ("userId", user_id.to_string()),
            ("page", page.unwrap_or(0).to_string()),
            ("size", size.unwrap_or(10).to_string()),
        ];
        self.send(self.http.get(self.url("/api/tasks")).query(&query))
            .await
    }

    /// GET `/api/tasks/{taskId}`
    pub async fn task(&self, task_id: i64) -> Result<ApiResponse<Task>> {
        self.send(self.http.get(self.url(&format!("/api/tasks/{}", task_id))))
            .await
    }

    /// GET `/api/tasks/{taskId}/status`
    pub async fn task_status(&self, task_id: i64) -> Result<ApiResponse<Value>> {
        self.send(
            self.http
                .get(self.url(&format!("/api/tasks/{}/status", task_id))),
        )
        .await
    }

    /// GET `/api/tasks/{taskId}/progress`
    pub async fn task_progress(&self, task_id: i64) -> Result<ApiResponse<TaskProgress>> {
        self.send(
            self.http
                .get(self.url(&format!("/api/tasks/{}/progress", task_id))),
        )
        .await
    }

    /// POST `/api/tasks/{taskId}/retry` with a fresh extraction-field list
    pub async fn retry_task(
        &self,
        task_id: i64,
        extract_fields: &str,
    ) -> Result<ApiResponse<Task>> {
        self.send(
            self.http
                .post(self.url(&format!("/api/tasks/{}/retry", task_id)))
                .query(&[("extractFields", extract_fields)]),
        )
        .await
    }

    /// DELETE `/api/tasks/{taskId}`
    pub async fn delete_task(&self, task_id: i64) -> Result<ApiResponse<()>> {
        self.send(
            self.http
                .delete(self.url(&format!("/api/tasks/{}", task_id))),
        )
        .await
    }

    /// GET `/api/tasks/batch` for a user's batch-task summaries
    pub async fn batch_tasks(&self, user_id: i64) -> Result<ApiResponse<Vec<Value>>> {
        self.send(
            self.http
                .get(self.url("/api/tasks/batch"))
                .query(&[("userId", user_id)]),
        )
        .await
    }

    /// GET `/api/tasks/batch/{taskName}`
    pub async fn batch_task_details(
        &self,
        user_id: i64,
        task_name: &str,
    ) -> Result<ApiResponse<Vec<Task>>> {
        self.send(
            self.http
                .get(self.url(&format!("/api/tasks/batch/{}", encode(task_name))))
                .query(&[("userId", user_id)]),
        )
        .await
    }

    /// DELETE `/api/tasks/batch/{taskName}`
    pub async fn delete_batch_task(
        &self,
        user_id: i64,
        task_name: &str,
    ) -> Result<ApiResponse<()>> {
        self.send(
            self.http
                .delete(self.url(&format!("/api/tasks/batch/{}", encode(task_name))))
                .query(&[("userId", user_id)]),
        )
        .await
    }

    /// POST `/api/tasks/create-json-zip` with an empty body; the task name
    /// travels as a query parameter
    pub async fn create_json_zip(&self, task_name: &str) -> Result<ApiResponse<Value>> {
        self.send(
            self.http
                .post(self.url("/api/tasks/create-json-zip"))
                .query(&[("taskName", task_name)]),
        )
        .await
    }

    /// GET `/api/tasks/{taskId}/progress/stream`, the backend's
    /// server-sent-event feed of progress updates. The stream ends when the
    /// backend closes it (task finished or failed).
    pub async fn stream_progress(
        &self,
        task_id: i64,
    ) -> Result<impl Stream<Item = Result<TaskProgress>>> {
        let request = self
            .http
            .get(self.url(&format!("/api/tasks/{}/progress/stream", task_id)));
        let response = self.authorize(request).send().await.map_err(|err| {
            error!(error = %err, "progress stream request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "progress stream rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let events = response.bytes_stream().eventsource();
        Ok(events.filter_map(|result| async move {
            match result {
                Ok(event) if event.data.trim().is_empty() => None,
                Ok(event) => Some(
                    serde_json::from_str::<TaskProgress>(&event.data).map_err(ApiError::from),
                ),
                Err(EventStreamError::Transport(err)) => Some(Err(ApiError::Http(err))),
                Err(err) => Some(Err(ApiError::Stream(err.to_string()))),
            }
        }))
    }
}
