// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! URL normalization for user-supplied addresses.

/// Ensure the raw address carries a scheme.
///
/// Prepends `https://` when the input does not start with `http`. The prefix
/// check is deliberately lax and kept for compatibility: an input like
/// `httpx.example` is treated as already schemed and fails later at fetch
/// time rather than here. No other validation happens at this stage.
pub fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}
