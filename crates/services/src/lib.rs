#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod seed;

pub use api::{
    AddNewWordsResponse, ApiClient, GenerateRequest, GenerateResponse, GenerationTrace,
    LoginResponse, NewWord, PracticeApi, TokenHandle,
};
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use config::ApiConfig;
pub use error::{ApiError, AppServicesError, AuthError};
pub use reqwest::StatusCode;
pub use seed::{SEED_LEMMAS, ensure_seed_words};
