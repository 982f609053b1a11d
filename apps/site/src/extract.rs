//! `Json` and `Form` extractors whose rejections answer with the `AppError`
//! JSON body instead of axum's plain-text default.

use axum::extract::FromRequest;

use crate::errors::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);
