// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, path::Path};

use apm_redux::{Effect, dispatch_with_effects};
use miette::IntoDiagnostic;

use crate::{
    ActionCodecErrorCouldNot, AppAction, AppStore, decode_action, render_product_list_view,
    select_product_list_view,
};

/// Lines that are blank or start with `#` are skipped.
fn is_action_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

/// Dispatch each action in `script` (one JSON action per line), running `effects` on
/// each one, and write the product list to `out` after every line.
///
/// Returns the number of lines that were dispatched. Stops at the first line that can't
/// be decoded; the lines before it stay applied.
///
/// # Errors
///
/// If a line can't be decoded, or `out` can't be written to.
pub async fn replay_actions(
    store: &mut AppStore,
    effects: &impl Effect<AppAction>,
    script: &str,
    out: &mut impl Write,
) -> miette::Result<usize> {
    let list_view_selector = select_product_list_view();
    let mut replayed = 0;

    for (index, line) in script.lines().enumerate() {
        if !is_action_line(line) {
            continue;
        }

        let line_number = index + 1;
        let action = decode_action(line)
            .map_err(|source| ReplayErrorCouldNot::DecodeLine { line_number, source })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "📼 replay", line_number = %line_number, action = ?action);

        dispatch_with_effects(store, effects, action.clone()).await;
        replayed += 1;

        let view = list_view_selector.select(store.state());
        writeln!(out, "# {line_number}: {}", action.type_name()).into_diagnostic()?;
        write!(out, "{}", render_product_list_view(&view)).into_diagnostic()?;
    }

    Ok(replayed)
}

/// [`replay_actions`] on the contents of the file at `path`.
///
/// # Errors
///
/// If the file can't be read, or see [`replay_actions`].
pub async fn try_replay_file(
    store: &mut AppStore,
    effects: &impl Effect<AppAction>,
    path: &Path,
    out: &mut impl Write,
) -> miette::Result<usize> {
    let script = std::fs::read_to_string(path).map_err(|error| ReplayErrorCouldNot::ReadFile {
        path: path.display().to_string(),
        reason: error.to_string(),
    })?;
    replay_actions(store, effects, &script, out).await
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum ReplayErrorCouldNot {
    #[error("📂 Could not read replay file {path}: {reason}")]
    ReadFile { path: String, reason: String },

    #[error("🧾 Could not replay line {line_number}")]
    DecodeLine {
        line_number: usize,
        #[source]
        #[diagnostic_source]
        source: ActionCodecErrorCouldNot,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryProductService, ProductEffects, create_store, get_products};
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = r#"
# Load, then narrow the list down.
{"type": "LOAD"}
{"type": "SET_PRODUCT_FILTER", "payload": "saw"}

{"type": "SOMETHING_ELSE_ENTIRELY"}
{"type": "TOGGLE_PRODUCT_CODE", "payload": false}
"#;

    #[tokio::test]
    async fn test_replay_script() {
        let mut store = create_store();
        let effects = ProductEffects::new(InMemoryProductService::default());
        let mut out: Vec<u8> = vec![];

        let replayed = replay_actions(&mut store, &effects, SCRIPT, &mut out)
            .await
            .unwrap();
        assert_eq!(replayed, 4);
        assert_eq!(get_products(store.state()).len(), 5);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("# 3: LOAD"));
        assert!(out.contains("# 6: SOMETHING_ELSE_ENTIRELY"));
        assert!(out.contains("Products (filtered by: saw)"));

        let last_block = out.rsplit("# 7: TOGGLE_PRODUCT_CODE").next().unwrap();
        assert!(last_block.contains("Saw"));
        assert!(!last_block.contains("TBX-0022"));
    }

    #[tokio::test]
    async fn test_replay_stops_at_bad_line() {
        let mut store = create_store();
        let effects = ProductEffects::new(InMemoryProductService::default());
        let script = "{\"type\": \"TOGGLE_PRODUCT_CODE\", \"payload\": false}\n{\"type\": \"SET_PRODUCT_FILTER\"}\n";

        let error = replay_actions(&mut store, &effects, script, &mut std::io::sink())
            .await
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<ReplayErrorCouldNot>(),
            Some(ReplayErrorCouldNot::DecodeLine { line_number: 2, .. })
        ));
        assert!(!store.state().products.show_product_code);
    }

    #[tokio::test]
    async fn test_replay_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.jsonl");
        std::fs::write(&path, SCRIPT).unwrap();

        let mut store = create_store();
        let effects = ProductEffects::new(InMemoryProductService::default());
        let replayed = try_replay_file(&mut store, &effects, &path, &mut std::io::sink())
            .await
            .unwrap();
        assert_eq!(replayed, 4);

        let error = try_replay_file(
            &mut store,
            &effects,
            &dir.path().join("missing.jsonl"),
            &mut std::io::sink(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ReplayErrorCouldNot>(),
            Some(ReplayErrorCouldNot::ReadFile { .. })
        ));
    }
}
