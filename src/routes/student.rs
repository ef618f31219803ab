use crate::{
    data::student::StudentDetails,
    error::{DecodeBodySnafu, EncodeBodySnafu, ParseIdSnafu, RosterResult},
    state::RosterState,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NameQuery {
    pub first_name: String,
    pub last_name: String,
}

fn parse_id(original: String) -> RosterResult<i64> {
    original.parse().context(ParseIdSnafu { original })
}

fn parse_details(body: &Bytes) -> RosterResult<StudentDetails> {
    serde_json::from_slice(body).context(DecodeBodySnafu)
}

fn json_response(status: StatusCode, value: &impl Serialize) -> RosterResult<Response> {
    let body = serde_json::to_vec(value).context(EncodeBodySnafu)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn post_student(State(state): State<RosterState>, body: Bytes) -> RosterResult<Response> {
    let details = parse_details(&body)?;
    let student = state.create(details).await?;
    json_response(StatusCode::CREATED, &student)
}

pub async fn get_students(
    State(state): State<RosterState>,
    Query(NameQuery {
        first_name,
        last_name,
    }): Query<NameQuery>,
) -> RosterResult<Response> {
    let students = state.find_by_name(&first_name, &last_name).await?;
    json_response(StatusCode::OK, &students)
}

pub async fn get_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Response> {
    let student = state.get_by_id(parse_id(id)?).await?;
    json_response(StatusCode::OK, &student)
}

pub async fn put_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
    body: Bytes,
) -> RosterResult<Response> {
    let id = parse_id(id)?;
    let details = parse_details(&body)?;
    let student = state.update(id, details).await?;
    json_response(StatusCode::OK, &student)
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<StatusCode> {
    state.delete(parse_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
