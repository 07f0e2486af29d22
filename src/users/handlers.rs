use axum::{
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::state::AppState;
use crate::users::{
    dto::{CreateUserForm, Submitted, UpdatePasswordForm, UpdateProfileForm},
    error::UserError,
    password::hash_password,
    repo_types::User,
    views,
};

// --- public routers ---

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/create-user", get(create_user_page))
        .route("/update/:user_id", get(update_user_page))
}

pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/create-user", post(create_user))
        .route("/update/:user_id", post(update_user))
        .route("/update-password", post(update_password))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Html<String>, UserError> {
    let users = User::list_all(&state.db).await?;
    Ok(Html(views::users_index(&users)))
}

pub async fn create_user_page() -> Html<String> {
    Html(views::create_user_form())
}

#[instrument(skip(state, form))]
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Result<Json<Submitted>, UserError> {
    let username = required(form.username, "username")?;
    let email = required(form.email, "email")?.to_lowercase();
    let password = form
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| UserError::Validation("password is required".into()))?;

    if !is_valid_email(&email) {
        warn!(%email, "invalid email");
        return Err(UserError::Validation("Invalid email".into()));
    }

    // Ensure neither value is already taken
    if User::find_by_username_or_email(&state.db, &username, &email)
        .await?
        .is_some()
    {
        warn!(%username, %email, "duplicate user");
        return Err(UserError::Duplicate);
    }

    let hash = hash_password(&password).map_err(|e| UserError::Hash(e.to_string()))?;
    let user = User::create(&state.db, &username, &email, &hash).await?;

    info!(user_id = %user.id, %username, "user created");
    Ok(Json(Submitted::ok()))
}

#[instrument(skip(state))]
pub async fn update_user_page(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Html<String>, UserError> {
    let Some(id) = parse_user_id(&user_id) else {
        warn!(%user_id, "malformed user id");
        return Ok(Html(views::user_not_found(&user_id)));
    };

    match User::find_by_id(&state.db, id).await? {
        Some(user) => Ok(Html(views::update_user_form(&user))),
        None => {
            warn!(%user_id, "update form requested for unknown user");
            Ok(Html(views::user_not_found(&user_id)))
        }
    }
}

#[instrument(skip(state, form))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(form): Form<UpdateProfileForm>,
) -> Result<Json<Submitted>, UserError> {
    let username = optional(form.username, "username")?;
    let email = match optional(form.email, "email")? {
        Some(e) => {
            let e = e.to_lowercase();
            if !is_valid_email(&e) {
                warn!(email = %e, "invalid email");
                return Err(UserError::Validation("Invalid email".into()));
            }
            Some(e)
        }
        None => None,
    };

    // A malformed or unknown id matches no record; the update is a no-op.
    let Some(id) = parse_user_id(&user_id) else {
        warn!(%user_id, "profile update for malformed user id");
        return Ok(Json(Submitted::ok()));
    };

    User::update_profile(&state.db, id, username.as_deref(), email.as_deref()).await?;

    info!(user_id = %id, "profile updated");
    Ok(Json(Submitted::ok()))
}

#[instrument(skip(state, form))]
pub async fn update_password(
    State(state): State<AppState>,
    Form(form): Form<UpdatePasswordForm>,
) -> Result<Json<Submitted>, UserError> {
    let password = form
        .new_password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| UserError::Validation("new_password is required".into()))?;

    // Same no-op policy as the profile update.
    let Some(id) = form.id.as_deref().and_then(parse_user_id) else {
        warn!("password update for missing or malformed user id");
        return Ok(Json(Submitted::ok()));
    };

    let hash = hash_password(&password).map_err(|e| UserError::Hash(e.to_string()))?;
    User::update_password(&state.db, id, &hash).await?;

    info!(user_id = %id, "password updated");
    Ok(Json(Submitted::ok()))
}

// --- field handling ---

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn parse_user_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// A field the form must carry with a non-blank value.
fn required(value: Option<String>, field: &str) -> Result<String, UserError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(UserError::Validation(format!("{field} is required"))),
    }
}

/// A field the form may omit, but must not send blank.
fn optional(value: Option<String>, field: &str) -> Result<Option<String>, UserError> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => {
            Err(UserError::Validation(format!("{field} must not be blank")))
        }
        Some(v) => Ok(Some(v.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@x"));
    }

    #[test]
    fn user_ids_parse_only_as_uuids() {
        assert!(parse_user_id("5f2d0f3e-8c9a-4e7b-9b1a-2f6f3f1c9d00").is_some());
        assert!(parse_user_id("42").is_none());
        assert!(parse_user_id("").is_none());
        assert!(parse_user_id("not-a-uuid").is_none());
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(required(None, "username").is_err());
        assert!(required(Some("".into()), "username").is_err());
        assert!(required(Some("   ".into()), "username").is_err());
        assert_eq!(required(Some(" alice ".into()), "username").unwrap(), "alice");
    }

    #[test]
    fn required_error_names_the_field() {
        let err = required(None, "email").unwrap_err();
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn optional_passes_absent_and_rejects_blank() {
        assert_eq!(optional(None, "email").unwrap(), None);
        assert!(optional(Some(" ".into()), "email").is_err());
        assert_eq!(
            optional(Some("bob".into()), "username").unwrap().as_deref(),
            Some("bob")
        );
    }
}
