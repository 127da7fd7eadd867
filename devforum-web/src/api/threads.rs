use shared::models::{CreateThreadRequest, Thread, UpdateThreadRequest};
use uuid::Uuid;

use super::{ApiError, ForumClient, RequestOptions, encode_body};

impl ForumClient {
    pub async fn threads_by_subcategory(&self, subcategory_id: &Uuid) -> Result<Vec<Thread>, ApiError> {
        self.request(
            &format!("/threads/subcategory/{subcategory_id}"),
            RequestOptions::get(),
        )
        .await
    }

    pub async fn thread_by_id(&self, id: &Uuid) -> Result<Thread, ApiError> {
        self.request(&format!("/threads/{id}"), RequestOptions::get())
            .await
    }

    pub async fn create_thread(&self, request: &CreateThreadRequest) -> Result<Thread, ApiError> {
        let endpoint = "/threads";
        let body = encode_body(endpoint, request)?;
        self.request(endpoint, RequestOptions::post().json(body)).await
    }

    pub async fn update_thread(
        &self,
        id: &Uuid,
        request: &UpdateThreadRequest,
    ) -> Result<Thread, ApiError> {
        let endpoint = format!("/threads/{id}");
        let body = encode_body(&endpoint, request)?;
        self.request(&endpoint, RequestOptions::put().json(body))
            .await
    }

    pub async fn delete_thread(&self, id: &Uuid) -> Result<(), ApiError> {
        self.request_unit(&format!("/threads/{id}"), RequestOptions::delete())
            .await
    }
}
