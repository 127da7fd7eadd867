use shared::models::{CreateStreamRequest, Stream, UpdateStreamRequest};
use uuid::Uuid;

use super::{ApiError, ForumClient, RequestOptions, encode_body};

impl ForumClient {
    pub async fn list_streams(&self) -> Result<Vec<Stream>, ApiError> {
        self.request("/streams", RequestOptions::get()).await
    }

    /// Streams currently live.
    pub async fn active_streams(&self) -> Result<Vec<Stream>, ApiError> {
        self.request("/streams/active", RequestOptions::get()).await
    }

    pub async fn stream_by_id(&self, id: &Uuid) -> Result<Stream, ApiError> {
        self.request(&format!("/streams/{id}"), RequestOptions::get())
            .await
    }

    pub async fn create_stream(&self, request: &CreateStreamRequest) -> Result<Stream, ApiError> {
        let endpoint = "/streams";
        let body = encode_body(endpoint, request)?;
        self.request(endpoint, RequestOptions::post().json(body)).await
    }

    pub async fn update_stream(
        &self,
        id: &Uuid,
        request: &UpdateStreamRequest,
    ) -> Result<Stream, ApiError> {
        let endpoint = format!("/streams/{id}");
        let body = encode_body(&endpoint, request)?;
        self.request(&endpoint, RequestOptions::put().json(body))
            .await
    }

    pub async fn delete_stream(&self, id: &Uuid) -> Result<(), ApiError> {
        self.request_unit(&format!("/streams/{id}"), RequestOptions::delete())
            .await
    }

    /// Mark a stream live.
    pub async fn start_stream(&self, id: &Uuid) -> Result<Stream, ApiError> {
        self.request(&format!("/streams/{id}/start"), RequestOptions::post())
            .await
    }

    pub async fn end_stream(&self, id: &Uuid) -> Result<Stream, ApiError> {
        self.request(&format!("/streams/{id}/end"), RequestOptions::post())
            .await
    }
}
