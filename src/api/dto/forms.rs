//! Form field decoding for the write endpoints.
//!
//! Accepts `multipart/form-data` or `application/x-www-form-urlencoded`
//! bodies and exposes typed getters that apply the configured input policy.

use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::json;

use crate::error::AppError;
use crate::utils::parse::{InputPolicy, parse_flag, parse_number};

/// Date format of `publishedAt`.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw text fields of one submitted form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn raw(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Text value, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.raw(name).unwrap_or_default().to_string()
    }

    /// Integer value, zero when absent.
    pub fn int(&self, name: &str, policy: InputPolicy) -> Result<i32, AppError> {
        parse_number(self.raw(name), name, policy)
    }

    /// Boolean value, `false` when absent.
    pub fn flag(&self, name: &str, policy: InputPolicy) -> Result<bool, AppError> {
        parse_flag(self.raw(name), name, policy)
    }

    /// `YYYY-MM-DD` date at midnight UTC.
    ///
    /// Absent values, and malformed ones under the lenient policy, become
    /// `0001-01-01T00:00:00Z`.
    pub fn date(&self, name: &str, policy: InputPolicy) -> Result<DateTime<Utc>, AppError> {
        let raw = match self.raw(name).map(str::trim) {
            None | Some("") => return Ok(zero_date()),
            Some(raw) => raw,
        };

        match (NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT), policy) {
            (Ok(date), _) => Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
            (Err(_), InputPolicy::Default) => Ok(zero_date()),
            (Err(_), InputPolicy::Reject) => Err(AppError::invalid(name)),
        }
    }
}

fn zero_date() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|_| malformed_body())?;
            return Ok(Self(fields));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|_| malformed_body())?;

        let mut fields = HashMap::new();
        while let Some(field) = multipart.next_field().await.map_err(|_| malformed_body())? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field.text().await.map_err(|_| malformed_body())?;
            fields.insert(name, value);
        }

        Ok(Self(fields))
    }
}

fn malformed_body() -> AppError {
    AppError::bad_request("invalid", json!({ "field": "body" }))
}
