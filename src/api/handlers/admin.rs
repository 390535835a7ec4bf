//! Handlers for the bearer-protected insert endpoints.
//!
//! Every write is a plain insert of the decoded form; a duplicate id or a
//! dangling reference fails as a generic store error.

use axum::extract::State;

use crate::api::dto::article::{association_from_form, content_from_form};
use crate::api::dto::course::new_course_from_form;
use crate::api::dto::envelope::{Envelope, WriteAck};
use crate::api::dto::forms::FormFields;
use crate::api::dto::university::new_university_from_form;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /v1/admin/editcourse`
pub async fn edit_course_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Envelope<WriteAck>, AppError> {
    let course = new_course_from_form(&form, &state.request_policy)?;
    state.course_service.create(course).await?;
    Ok(WriteAck::response())
}

/// `POST /v1/admin/edituniversity`
pub async fn edit_university_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Envelope<WriteAck>, AppError> {
    let university = new_university_from_form(&form, &state.request_policy)?;
    state.university_service.create(university).await?;
    Ok(WriteAck::response())
}

/// `POST /v1/admin/editcontent`
pub async fn edit_content_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Envelope<WriteAck>, AppError> {
    let content = content_from_form(&form, &state.request_policy)?;
    state.article_service.create_content(content).await?;
    Ok(WriteAck::response())
}

/// `POST /v1/admin/editarticle`
///
/// Links a content record to a course with its admission outcome.
pub async fn edit_article_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Envelope<WriteAck>, AppError> {
    let association = association_from_form(&form, &state.request_policy)?;
    state.article_service.create_association(association).await?;
    Ok(WriteAck::response())
}
