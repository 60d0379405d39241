use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned by sign-up and login. The token is also stored in the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthDto {
    pub user: UserDto,
    pub token: String,
}
