//! Exercise API handlers.
//!
//! Bodies that are not urlencoded forms (or queries that fail to decode) are
//! treated as empty, so missing fields surface as the usual 400 messages.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::http::dto::{ExerciseView, LogView, NewUserForm, UserView};
use crate::http::server::AppState;
use crate::tracker::{ExerciseSubmission, LogRequest};

/// `POST /api/exercise/new-user`
pub async fn create_user(
    State(state): State<AppState>,
    form: Result<Form<NewUserForm>, FormRejection>,
) -> Response {
    let form = match lenient_form(form) {
        Ok(form) => form,
        Err(rejection) => return rejection,
    };

    match state.tracker.registry.create_user(form.username.as_deref()).await {
        Ok(user) => Json(UserView::from(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /api/exercise/users`
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.tracker.registry.list_users().await {
        Ok(users) => {
            let views: Vec<UserView> = users.into_iter().map(UserView::from).collect();
            Json(views).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// `POST /api/exercise/add`
pub async fn add_exercise(
    State(state): State<AppState>,
    form: Result<Form<ExerciseSubmission>, FormRejection>,
) -> Response {
    let submission = match lenient_form(form) {
        Ok(submission) => submission,
        Err(rejection) => return rejection,
    };

    match state.tracker.recorder.add_exercise(&submission).await {
        Ok(recorded) => Json(ExerciseView::from(recorded)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /api/exercise/log`
pub async fn query_log(
    State(state): State<AppState>,
    query: Result<Query<LogRequest>, QueryRejection>,
) -> Response {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable query, treating as empty");
            LogRequest::default()
        }
    };

    match state.tracker.log_query.query_log(&request).await {
        Ok(log) => Json(LogView::from(log)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Unwrap a form, substituting an empty one for anything but an
/// oversized body.
fn lenient_form<T: Default>(form: Result<Form<T>, FormRejection>) -> Result<T, Response> {
    match form {
        Ok(Form(value)) => Ok(value),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(rejection.into_response())
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable form body, treating as empty");
            Ok(T::default())
        }
    }
}
