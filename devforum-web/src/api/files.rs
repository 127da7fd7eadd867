use reqwest::{
    header::HeaderMap,
    multipart::{Form, Part},
};
use shared::models::FileRecord;
use tracing::error;
use uuid::Uuid;

use super::{ApiError, ForumClient, RequestOptions};

/// An attachment to send to `POST /files`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
    pub thread_id: Option<Uuid>,
    pub post_id: Option<Uuid>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
            thread_id: None,
            post_id: None,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    #[must_use]
    pub fn attached_to_thread(mut self, thread_id: Uuid) -> Self {
        self.thread_id = Some(thread_id);
        self
    }

    #[must_use]
    pub fn attached_to_post(mut self, post_id: Uuid) -> Self {
        self.post_id = Some(post_id);
        self
    }

    fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }

    fn into_form(self) -> Result<Form, ApiError> {
        let mut part = Part::bytes(self.bytes).file_name(self.file_name);
        if let Some(mime_type) = self.mime_type {
            part = part.mime_str(&mime_type)?;
        }

        let mut form = Form::new().part("file", part);
        if let Some(thread_id) = self.thread_id {
            form = form.text("thread_id", thread_id.to_string());
        }
        if let Some(post_id) = self.post_id {
            form = form.text("post_id", post_id.to_string());
        }
        Ok(form)
    }
}

impl ForumClient {
    pub async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        self.request("/files", RequestOptions::get()).await
    }

    pub async fn file_by_id(&self, id: &Uuid) -> Result<FileRecord, ApiError> {
        self.request(&format!("/files/{id}"), RequestOptions::get())
            .await
    }

    /// Upload an attachment as multipart form data.
    ///
    /// Files over the configured upload limit are rejected before any network I/O.
    pub async fn upload_file(&self, upload: FileUpload) -> Result<FileRecord, ApiError> {
        let endpoint = "/files";
        let size = upload.size();
        if size > self.max_upload_size {
            let err = ApiError::PayloadTooLarge {
                size,
                limit: self.max_upload_size,
            };
            error!(endpoint, error = %err, "upload rejected");
            return Err(err);
        }

        let form = upload.into_form().inspect_err(|err| {
            error!(endpoint, error = %err, "failed to build upload form");
        })?;
        // An explicitly empty header map drops the JSON content type.
        let options = RequestOptions::post()
            .headers(HeaderMap::new())
            .multipart(form);
        self.request(endpoint, options).await
    }

    pub async fn delete_file(&self, id: &Uuid) -> Result<(), ApiError> {
        self.request_unit(&format!("/files/{id}"), RequestOptions::delete())
            .await
    }
}
