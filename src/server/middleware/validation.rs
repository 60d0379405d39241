//! Request body validation.
//!
//! `ValidatedJson<T>` deserializes the body like `Json<T>` and then runs `T::validate`.
//! Malformed JSON and the first failed rule both become a 400 in the response envelope.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    model::{
        auth::LoginDto,
        game::GamePayloadDto,
        review::{CreateReviewDto, UpdateReviewDto},
        user::UserPayloadDto,
    },
    server::{
        error::AppError,
        model::{
            review::{MAX_RATING, MIN_RATING},
            user::parse_role,
        },
        util::parse::parse_date,
    },
};

/// Body-level rules for a request payload.
pub trait Validate {
    /// Returns the message for the first rule the value breaks.
    fn validate(&self) -> Result<(), String>;
}

/// JSON body extractor that rejects invalid payloads with 400.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(AppError::BadRequest)?;

        Ok(Self(value))
    }
}

const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

fn check_password(password: &str) -> Result<(), String> {
    let strong = password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if strong {
        Ok(())
    } else {
        Err(format!(
            "password must be at least 8 characters and contain a lowercase letter, an uppercase letter, a digit and one of {}",
            PASSWORD_SYMBOLS
        ))
    }
}

/// Structural check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn check_max_len(field: &str, value: Option<&String>, max: usize) -> Result<(), String> {
    match value {
        Some(value) if value.chars().count() > max => Err(format!(
            "{} must be at most {} characters long",
            field, max
        )),
        _ => Ok(()),
    }
}

fn check_review_fields(title: &str, rating: i32) -> Result<(), String> {
    let title_len = title.trim().chars().count();
    if !(3..=255).contains(&title_len) {
        return Err("title must be between 3 and 255 characters long".to_string());
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "rating must be an integer between {} and {}",
            MIN_RATING, MAX_RATING
        ));
    }
    Ok(())
}

impl Validate for UserPayloadDto {
    fn validate(&self) -> Result<(), String> {
        if self.username.trim().chars().count() < 3 {
            return Err("username must be at least 3 characters long".to_string());
        }
        if !is_valid_email(self.email.trim()) {
            return Err("email must be a valid email".to_string());
        }
        check_password(&self.password)?;
        if let Some(role) = &self.role {
            if parse_role(role).is_none() {
                return Err("role must be one of: user, admin".to_string());
            }
        }
        Ok(())
    }
}

impl Validate for LoginDto {
    fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("email is required".to_string());
        }
        if self.password.is_empty() {
            return Err("password is required".to_string());
        }
        Ok(())
    }
}

impl Validate for GamePayloadDto {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is required".to_string());
        }
        check_max_len("genre", self.genre.as_ref(), 100)?;
        check_max_len("description", self.description.as_ref(), 1000)?;
        check_max_len("developer", self.developer.as_ref(), 255)?;
        check_max_len("publisher", self.publisher.as_ref(), 255)?;
        check_max_len("platform", self.platform.as_ref(), 100)?;

        parse_date("release_date", self.release_date.as_deref()).map_err(|e| e.to_string())?;

        if let Some(image_url) = self.image_url.as_deref().map(str::trim) {
            if !image_url.is_empty() && Url::parse(image_url).is_err() {
                return Err("image_url must be a valid URL".to_string());
            }
        }
        Ok(())
    }
}

impl Validate for CreateReviewDto {
    fn validate(&self) -> Result<(), String> {
        check_review_fields(&self.title, self.rating)?;
        if self.game_id < 1 {
            return Err("game_id must be a positive integer".to_string());
        }
        Ok(())
    }
}

impl Validate for UpdateReviewDto {
    fn validate(&self) -> Result<(), String> {
        check_review_fields(&self.title, self.rating)
    }
}
