//! University form decoding.

use super::forms::FormFields;
use super::pagination::RequestPolicy;
use crate::domain::entities::NewUniversity;
use crate::error::AppError;

pub fn new_university_from_form(
    form: &FormFields,
    policy: &RequestPolicy,
) -> Result<NewUniversity, AppError> {
    let input = policy.input;

    Ok(NewUniversity {
        id: form.int("id", input)?,
        name_en: form.text("nameEn"),
        name_ch: form.text("nameCh"),
        city: form.text("city"),
        is_from_daad: form.flag("isFromDaad", input)?,
        is_tu9: form.flag("isTu9", input)?,
        is_u15: form.flag("isU15", input)?,
        link: form.text("link"),
        qs_ranking: form.int("qsRanking", input)?,
    })
}
