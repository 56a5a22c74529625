// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for stale-code reports.

pub mod json;
pub mod text;
