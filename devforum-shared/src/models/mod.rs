//! Wire records exchanged with the DevForum REST API.
//!
//! The client treats every record as a plain value: responses overwrite the
//! local copy wholesale and none of these types carry behaviour beyond
//! (de)serialization.

pub mod auth;
pub mod category;
pub mod errors;
pub mod file;
pub mod post;
pub mod stream;
pub mod thread;
pub mod user;

pub use auth::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ValidateTokenResponse,
};
pub use category::{
    Category, CreateCategoryRequest, CreateSubcategoryRequest, Subcategory, UpdateCategoryRequest,
    UpdateSubcategoryRequest,
};
pub use errors::ErrorResponse;
pub use file::FileRecord;
pub use post::{CreatePostRequest, Post, UpdatePostRequest};
pub use stream::{CreateStreamRequest, Stream, UpdateStreamRequest};
pub use thread::{CreateThreadRequest, Thread, UpdateThreadRequest};
pub use user::{ChangePasswordRequest, UpdateUserRequest, User};
