// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Inbound actions arrive as JSON objects shaped like `{"type": "...", "payload": ...}`.
//! This module turns them into typed [`AppAction`]s.
//!
//! - A type string that doesn't name any action is not an error. It becomes
//!   [`AppAction::Unknown`], which every reducer ignores.
//! - A known type whose payload is missing or has the wrong shape is an error, see
//!   [`action_codec_error::ActionCodecErrorCouldNot`].

use std::str::FromStr;

use serde::{Deserialize, de::DeserializeOwned};

use crate::{AppAction, Product, ProductAction, UserAction};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    #[strum(serialize = "@@INIT")]
    Init,
    ToggleUserNameMask,
    ToggleProductCode,
    SetCurrentProduct,
    ClearCurrentProduct,
    InitializeCurrentProduct,
    SetProductFilter,
    Load,
    LoadSuccess,
    LoadFail,
    UpdateProduct,
    UpdateProductSuccess,
    UpdateProductFail,
    CreateProduct,
    CreateProductSuccess,
    CreateProductFail,
    DeleteProduct,
    DeleteProductSuccess,
    DeleteProductFail,
}

/// Untyped action, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

/// Parse one JSON action.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a JSON object with a string `type` field
/// - The type is known, and its payload is missing or can't be decoded
pub fn decode_action(json: &str) -> Result<AppAction, ActionCodecErrorCouldNot> {
    let raw: RawAction = serde_json::from_str(json).map_err(|error| {
        ActionCodecErrorCouldNot::ParseJson {
            reason: error.to_string(),
        }
    })?;
    decode_raw_action(raw)
}

/// # Errors
///
/// Returns an error if the type is known, and its payload is missing or can't be
/// decoded.
pub fn decode_raw_action(raw: RawAction) -> Result<AppAction, ActionCodecErrorCouldNot> {
    let Ok(action_type) = ActionType::from_str(&raw.action_type) else {
        // % is Display, ? is Debug.
        tracing::debug!(message = "❔ unknown action type", action_type = %raw.action_type);
        return Ok(AppAction::Unknown(raw.action_type));
    };

    let payload = raw.payload;
    Ok(match action_type {
        ActionType::Init => AppAction::Init,
        ActionType::ToggleUserNameMask => {
            UserAction::ToggleUserNameMask(decode_payload(action_type, payload)?).into()
        }
        ActionType::ToggleProductCode => {
            ProductAction::ToggleProductCode(decode_payload(action_type, payload)?).into()
        }
        ActionType::SetCurrentProduct => {
            ProductAction::SetCurrentProduct(decode_payload::<Product>(action_type, payload)?)
                .into()
        }
        ActionType::ClearCurrentProduct => ProductAction::ClearCurrentProduct.into(),
        ActionType::InitializeCurrentProduct => ProductAction::InitializeCurrentProduct.into(),
        ActionType::SetProductFilter => {
            ProductAction::SetProductFilter(decode_payload(action_type, payload)?).into()
        }
        ActionType::Load => ProductAction::Load.into(),
        ActionType::LoadSuccess => {
            ProductAction::LoadSuccess(decode_payload(action_type, payload)?).into()
        }
        ActionType::LoadFail => {
            ProductAction::LoadFail(decode_payload(action_type, payload)?).into()
        }
        ActionType::UpdateProduct => {
            ProductAction::UpdateProduct(decode_payload(action_type, payload)?).into()
        }
        ActionType::UpdateProductSuccess => {
            ProductAction::UpdateProductSuccess(decode_payload(action_type, payload)?).into()
        }
        ActionType::UpdateProductFail => {
            ProductAction::UpdateProductFail(decode_payload(action_type, payload)?).into()
        }
        ActionType::CreateProduct => {
            ProductAction::CreateProduct(decode_payload(action_type, payload)?).into()
        }
        ActionType::CreateProductSuccess => {
            ProductAction::CreateProductSuccess(decode_payload(action_type, payload)?).into()
        }
        ActionType::CreateProductFail => {
            ProductAction::CreateProductFail(decode_payload(action_type, payload)?).into()
        }
        ActionType::DeleteProduct => {
            ProductAction::DeleteProduct(decode_payload(action_type, payload)?).into()
        }
        ActionType::DeleteProductSuccess => {
            ProductAction::DeleteProductSuccess(decode_payload(action_type, payload)?).into()
        }
        ActionType::DeleteProductFail => {
            ProductAction::DeleteProductFail(decode_payload(action_type, payload)?).into()
        }
    })
}

fn decode_payload<T: DeserializeOwned>(
    action_type: ActionType,
    maybe_payload: Option<serde_json::Value>,
) -> Result<T, ActionCodecErrorCouldNot> {
    let payload = maybe_payload.ok_or(ActionCodecErrorCouldNot::FindPayload { action_type })?;
    serde_json::from_value(payload).map_err(|error| {
        ActionCodecErrorCouldNot::DecodePayload {
            action_type,
            reason: error.to_string(),
        }
    })
}

pub mod action_codec_error {
    use crate::ActionType;

    #[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
    pub enum ActionCodecErrorCouldNot {
        #[error("📭 Could not parse action JSON: {reason}")]
        #[diagnostic(help("Each action is a JSON object with a string `type` and an optional `payload`"))]
        ParseJson { reason: String },

        #[error("📦 Could not find payload for action '{action_type}'")]
        FindPayload { action_type: ActionType },

        #[error("🧩 Could not decode payload for action '{action_type}': {reason}")]
        DecodePayload {
            action_type: ActionType,
            reason: String,
        },
    }
}
pub use action_codec_error::ActionCodecErrorCouldNot;
