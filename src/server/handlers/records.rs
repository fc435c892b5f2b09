use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::pages;
use crate::services::ValidationService;

/// Fields posted by the add and edit forms
#[derive(Debug, Deserialize)]
pub struct RecordForm {
    pub name: String,
    pub age: String,
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = state.records.list().await?;
    Ok(pages::index(&records)?)
}

pub async fn add_record(
    State(state): State<AppState>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, AppError> {
    let (name, age) = ValidationService::validate_record(&form.name, &form.age)?;
    state.records.create(&name, age).await?;
    Ok(Redirect::to("/"))
}

pub async fn edit_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let record = state.records.get(id).await?;
    Ok(pages::update(&record)?)
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<RecordForm>,
) -> Result<Redirect, AppError> {
    let (name, age) = ValidationService::validate_record(&form.name, &form.age)?;
    state.records.update(id, &name, age).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    state.records.delete(id).await?;
    Ok(Redirect::to("/"))
}

pub async fn database_view(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let lines = state.records.list_formatted().await?;
    Ok(pages::database(&lines)?)
}
