use shared::models::{CreatePostRequest, Post, UpdatePostRequest};
use uuid::Uuid;

use super::{ApiError, ForumClient, RequestOptions, encode_body};

impl ForumClient {
    pub async fn posts_by_thread(&self, thread_id: &Uuid) -> Result<Vec<Post>, ApiError> {
        self.request(&format!("/posts/thread/{thread_id}"), RequestOptions::get())
            .await
    }

    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, ApiError> {
        let endpoint = "/posts";
        let body = encode_body(endpoint, request)?;
        self.request(endpoint, RequestOptions::post().json(body)).await
    }

    pub async fn update_post(&self, id: &Uuid, request: &UpdatePostRequest) -> Result<Post, ApiError> {
        let endpoint = format!("/posts/{id}");
        let body = encode_body(&endpoint, request)?;
        self.request(&endpoint, RequestOptions::put().json(body))
            .await
    }

    pub async fn delete_post(&self, id: &Uuid) -> Result<(), ApiError> {
        self.request_unit(&format!("/posts/{id}"), RequestOptions::delete())
            .await
    }
}
