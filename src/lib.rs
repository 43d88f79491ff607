// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! SEO inspector service: one-shot on-page and site-level SEO signal
//! extraction, exposed over a small JSON API.
//!
//! The crate is a library so integration tests can build the router directly
//! without starting the full binary.

pub mod app;
pub mod error;
pub mod models;
pub mod services;
