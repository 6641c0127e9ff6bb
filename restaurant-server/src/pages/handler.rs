//! Page Handlers (HTML)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDate;
use shared::models::Booking;
use tera::Context;

use super::form::{BookingForm, FieldError};
use crate::core::ServerState;
use crate::db::repository::{RepoError, booking, menu_item};
use crate::reservations::{is_slot_taken, taken_slots};
use crate::utils::AppError;
use crate::utils::extract::Payload;

/// Failure while building a page; rendered as a bare HTML error
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RepoError> for PageError {
    fn from(err: RepoError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.http_status();
        if self.0.is_system() {
            tracing::error!(code = %self.0.code, message = %self.0.message, "Page failed to render");
        }
        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!DOCTYPE html><html><body><h1>{} {}</h1></body></html>",
            status.as_u16(),
            reason
        );
        (status, Html(body)).into_response()
    }
}

pub type PageResult = Result<Response, PageError>;

/// GET / - 首页
pub async fn home(State(state): State<ServerState>) -> PageResult {
    Ok(state.pages.render_static("index.html")?.into_response())
}

/// GET /about/
pub async fn about(State(state): State<ServerState>) -> PageResult {
    Ok(state.pages.render_static("about.html")?.into_response())
}

/// GET /menu/ - 全部菜单
pub async fn menu(State(state): State<ServerState>) -> PageResult {
    let items = menu_item::find_all(&state.db.pool).await?;
    let mut ctx = Context::new();
    ctx.insert("menu", &items);
    Ok(state.pages.render("menu.html", &ctx)?.into_response())
}

/// GET /menu_item/{id}/ - 单个菜品，不存在时 404 页
pub async fn menu_item(State(state): State<ServerState>, Path(raw_id): Path<String>) -> PageResult {
    let item = match raw_id.parse::<i64>() {
        Ok(id) => menu_item::find_by_id(&state.db.pool, id).await?,
        Err(_) => None,
    };

    match item {
        Some(item) => {
            let mut ctx = Context::new();
            ctx.insert("item", &item);
            Ok(state.pages.render("menu_item.html", &ctx)?.into_response())
        }
        None => {
            let mut ctx = Context::new();
            ctx.insert("message", &format!("No menu item with id {raw_id}."));
            let page = state.pages.render("not_found.html", &ctx)?;
            Ok((StatusCode::NOT_FOUND, page).into_response())
        }
    }
}

/// GET /book/ - 空表单
pub async fn book_form(State(state): State<ServerState>) -> PageResult {
    render_book(&state, &BookingForm::default(), &[], None, None)
}

/// POST /book/ - 校验通过则保存 (不做时段冲突检查)
pub async fn book_submit(
    State(state): State<ServerState>,
    Payload(form): Payload<BookingForm>,
) -> PageResult {
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            let taken = match form.date() {
                Some(date) => {
                    let same_day = booking::find_by_date(&state.db.pool, date).await?;
                    Some((date, taken_slots(&same_day, date)))
                }
                None => None,
            };
            return render_book(&state, &form, &errors, None, taken);
        }
    };

    let date = data.reservation_date;
    let existing = booking::find_by_date(&state.db.pool, date).await?;
    if is_slot_taken(&existing, date, data.reservation_slot) {
        tracing::warn!(%date, slot = data.reservation_slot, "Form booking shares an occupied slot");
    }

    let saved = booking::create(&state.db.pool, data).await?;
    tracing::info!(booking_id = saved.id, "Booking saved from form");

    let mut all = existing;
    all.push(saved.clone());
    let taken = taken_slots(&all, date);
    render_book(
        &state,
        &BookingForm::default(),
        &[],
        Some(&saved),
        Some((date, taken)),
    )
}

fn render_book(
    state: &ServerState,
    form: &BookingForm,
    errors: &[FieldError],
    saved: Option<&Booking>,
    taken: Option<(NaiveDate, Vec<i16>)>,
) -> PageResult {
    let (taken_date, taken) = taken.unzip();
    let mut ctx = Context::new();
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("saved", &saved);
    ctx.insert("taken_date", &taken_date);
    ctx.insert("taken_slots", &taken.unwrap_or_default());
    Ok(state.pages.render("book.html", &ctx)?.into_response())
}

/// GET /reservations/ - 全部预订
pub async fn reservations(State(state): State<ServerState>) -> PageResult {
    let bookings = booking::find_all(&state.db.pool).await?;
    let mut ctx = Context::new();
    ctx.insert("bookings", &bookings);
    Ok(state.pages.render("bookings.html", &ctx)?.into_response())
}
