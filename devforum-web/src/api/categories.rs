use shared::models::{
    Category, CreateCategoryRequest, CreateSubcategoryRequest, Subcategory, UpdateCategoryRequest,
    UpdateSubcategoryRequest,
};
use uuid::Uuid;

use super::{ApiError, ForumClient, RequestOptions, encode_body};

impl ForumClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.request("/categories", RequestOptions::get()).await
    }

    pub async fn category_by_id(&self, id: &Uuid) -> Result<Category, ApiError> {
        self.request(&format!("/categories/{id}"), RequestOptions::get())
            .await
    }

    pub async fn category_by_slug(&self, slug: &str) -> Result<Category, ApiError> {
        self.request(&format!("/categories/slug/{slug}"), RequestOptions::get())
            .await
    }

    /// Admin only.
    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let endpoint = "/categories/admin";
        let body = encode_body(endpoint, request)?;
        self.request(endpoint, RequestOptions::post().json(body)).await
    }

    /// Admin only.
    pub async fn update_category(
        &self,
        id: &Uuid,
        request: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let endpoint = format!("/categories/admin/{id}");
        let body = encode_body(&endpoint, request)?;
        self.request(&endpoint, RequestOptions::put().json(body))
            .await
    }

    /// Admin only.
    pub async fn delete_category(&self, id: &Uuid) -> Result<(), ApiError> {
        self.request_unit(&format!("/categories/admin/{id}"), RequestOptions::delete())
            .await
    }

    /// Admin only.
    pub async fn create_subcategory(
        &self,
        category_id: &Uuid,
        request: &CreateSubcategoryRequest,
    ) -> Result<Subcategory, ApiError> {
        let endpoint = format!("/categories/admin/{category_id}/subcategories");
        let body = encode_body(&endpoint, request)?;
        self.request(&endpoint, RequestOptions::post().json(body))
            .await
    }

    /// Admin only.
    pub async fn update_subcategory(
        &self,
        category_id: &Uuid,
        subcategory_id: &Uuid,
        request: &UpdateSubcategoryRequest,
    ) -> Result<Subcategory, ApiError> {
        let endpoint = format!("/categories/admin/{category_id}/subcategories/{subcategory_id}");
        let body = encode_body(&endpoint, request)?;
        self.request(&endpoint, RequestOptions::put().json(body))
            .await
    }

    /// Admin only.
    pub async fn delete_subcategory(
        &self,
        category_id: &Uuid,
        subcategory_id: &Uuid,
    ) -> Result<(), ApiError> {
        self.request_unit(
            &format!("/categories/admin/{category_id}/subcategories/{subcategory_id}"),
            RequestOptions::delete(),
        )
        .await
    }
}
