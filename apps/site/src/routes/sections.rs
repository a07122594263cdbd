//! Resume data handlers — the serve-mode API over the JSON file store.
//!
//! The document is loosely structured; handlers operate on raw
//! `serde_json::Value` so unknown fields round-trip untouched. List sections
//! share one generic handler set; object items carry a small integer `id`
//! assigned as `max(existing) + 1`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// List sections addressable as `/api/{section}`.
const LIST_SECTIONS: &[&str] = &[
    "skills",
    "education",
    "experience",
    "achievements",
    "certificates",
    "interests",
];

// ────────────────────────────────────────────────────────────────────────────
// Document and personal block
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/db — the full document.
pub async fn get_document(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    Ok(Json(state.store.load().await?))
}

/// GET /api/personal
pub async fn get_personal(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let data = load_object(&state).await?;
    Ok(Json(
        data.get("personal").cloned().unwrap_or_else(|| json!({})),
    ))
}

/// PUT /api/personal — replace the record wholesale.
pub async fn put_personal(
    State(state): State<AppState>,
    Json(update): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let update = require_object(update)?;
    let mut data = load_object(&state).await?;
    data.insert("personal".to_string(), Value::Object(update.clone()));
    save_object(&state, data).await?;
    Ok(Json(json!({
        "message": "Personal info updated successfully",
        "data": update
    })))
}

/// PATCH /api/personal — merge keys into the existing record.
pub async fn patch_personal(
    State(state): State<AppState>,
    Json(update): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let update = require_object(update)?;
    let mut data = load_object(&state).await?;
    let mut personal = match data.remove("personal") {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    for (key, value) in update {
        personal.insert(key, value);
    }
    data.insert("personal".to_string(), Value::Object(personal.clone()));
    save_object(&state, data).await?;
    Ok(Json(json!({
        "message": "Personal info updated successfully",
        "data": personal
    })))
}

// ────────────────────────────────────────────────────────────────────────────
// List sections
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/{section}
pub async fn get_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<Value>, AppError> {
    known_section(&section)?;
    let data = load_object(&state).await?;
    Ok(Json(data.get(&section).cloned().unwrap_or_else(|| json!([]))))
}

/// POST /api/{section} — append an item. Interests are unique strings keyed
/// by `name`; every other section holds objects with a generated id.
pub async fn post_item(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(item): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    known_section(&section)?;
    let mut data = load_object(&state).await?;

    if section == "interests" {
        let name = item
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Validation("Interest must have name".to_string()))?
            .to_string();
        let response = {
            let list = section_list(&mut data, &section);
            if list.iter().any(|v| v.as_str() == Some(name.as_str())) {
                return Err(AppError::Validation("Interest already exists".to_string()));
            }
            list.push(Value::String(name));
            json!({ "message": "Interest added successfully", "interests": list.clone() })
        };
        save_object(&state, data).await?;
        return Ok((StatusCode::CREATED, Json(response)));
    }

    let mut item = require_object(item)?;
    validate_new_item(&section, &item)?;

    let response = {
        let list = section_list(&mut data, &section);
        let id = next_id(list);
        item.insert("id".to_string(), json!(id));
        list.push(Value::Object(item.clone()));
        info!("added {section} item {id}");
        json!({
            "message": format!("{section} item added successfully"),
            "item": item
        })
    };
    save_object(&state, data).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/{section} — only interests supports wholesale replacement.
pub async fn put_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<Value>, AppError> {
    known_section(&section)?;
    if section != "interests" {
        return Err(AppError::Validation(format!(
            "Section '{section}' does not support replacement"
        )));
    }
    let list = match value {
        Value::Array(list) => list,
        _ => return Err(AppError::Validation("Interests must be a list".to_string())),
    };
    let mut data = load_object(&state).await?;
    data.insert("interests".to_string(), Value::Array(list.clone()));
    save_object(&state, data).await?;
    Ok(Json(json!({
        "message": "Interests updated successfully",
        "interests": list
    })))
}

// ────────────────────────────────────────────────────────────────────────────
// Items by id
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/{section}/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, i64)>,
) -> Result<Json<Value>, AppError> {
    object_section(&section)?;
    let mut data = load_object(&state).await?;
    let list = section_list(&mut data, &section);
    let item = find_item(list, id).ok_or_else(|| not_found(&section, id))?;
    Ok(Json(item.clone()))
}

/// PATCH /api/{section}/{id} — merge keys into the item.
pub async fn patch_item(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, i64)>,
    Json(update): Json<Value>,
) -> Result<Json<Value>, AppError> {
    object_section(&section)?;
    let update = require_object(update)?;
    if update.is_empty() {
        return Err(AppError::Validation("No data provided".to_string()));
    }

    let mut data = load_object(&state).await?;
    let updated = {
        let list = section_list(&mut data, &section);
        let item = find_item_mut(list, id).ok_or_else(|| not_found(&section, id))?;
        if let Value::Object(obj) = item {
            for (key, value) in update {
                obj.insert(key, value);
            }
        }
        item.clone()
    };
    save_object(&state, data).await?;
    Ok(Json(json!({
        "message": format!("{section} item updated successfully"),
        "item": updated
    })))
}

/// DELETE /api/{section}/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path((section, id)): Path<(String, i64)>,
) -> Result<Json<Value>, AppError> {
    object_section(&section)?;
    let mut data = load_object(&state).await?;
    let removed = {
        let list = section_list(&mut data, &section);
        let before = list.len();
        list.retain(|v| item_id(v) != Some(id));
        before != list.len()
    };
    if !removed {
        return Err(not_found(&section, id));
    }
    save_object(&state, data).await?;
    info!("deleted {section} item {id}");
    Ok(Json(json!({
        "message": format!("{section} item deleted successfully")
    })))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn known_section(section: &str) -> Result<(), AppError> {
    if LIST_SECTIONS.contains(&section) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Unknown section '{section}'")))
    }
}

/// Known section whose items are objects with ids (everything but interests).
fn object_section(section: &str) -> Result<(), AppError> {
    known_section(section)?;
    if section == "interests" {
        return Err(AppError::Validation(
            "Interest entries are not addressable by id".to_string(),
        ));
    }
    Ok(())
}

fn not_found(section: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{section} item {id} not found"))
}

fn require_object(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Validation("No data provided".to_string())),
    }
}

async fn load_object(state: &AppState) -> Result<Map<String, Value>, AppError> {
    match state.store.load().await? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::Validation(
            "Data file root must be a JSON object".to_string(),
        )),
    }
}

async fn save_object(state: &AppState, data: Map<String, Value>) -> Result<(), AppError> {
    state.store.save(&Value::Object(data)).await?;
    Ok(())
}

fn section_list<'a>(data: &'a mut Map<String, Value>, section: &str) -> &'a mut Vec<Value> {
    let entry = data
        .entry(section.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !matches!(entry, Value::Array(_)) {
        *entry = Value::Array(Vec::new());
    }
    match entry {
        Value::Array(list) => list,
        _ => unreachable!("entry was just coerced to an array"),
    }
}

fn item_id(item: &Value) -> Option<i64> {
    item.get("id").and_then(Value::as_i64)
}

fn find_item(list: &[Value], id: i64) -> Option<&Value> {
    list.iter().find(|v| item_id(v) == Some(id))
}

fn find_item_mut(list: &mut [Value], id: i64) -> Option<&mut Value> {
    list.iter_mut().find(|v| item_id(v) == Some(id))
}

fn next_id(list: &[Value]) -> i64 {
    list.iter().filter_map(item_id).max().unwrap_or(0) + 1
}

fn validate_new_item(section: &str, item: &Map<String, Value>) -> Result<(), AppError> {
    let invalid = |msg: &str| Err(AppError::Validation(msg.to_string()));
    match section {
        "skills" if !(item.contains_key("name") && item.contains_key("level")) => {
            invalid("Skill must have name and level")
        }
        "education" if !(item.contains_key("institution") && item.contains_key("degree")) => {
            invalid("Education must have institution and degree")
        }
        "experience" if !(item.contains_key("company") || item.contains_key("project")) => {
            invalid("Experience must have company or project")
        }
        "achievements" if !item.contains_key("title") => invalid("Achievement must have title"),
        "certificates" if !item.contains_key("title") => invalid("Certificate must have title"),
        _ => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
