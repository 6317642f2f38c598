//! fintrack - terminal client for currency rates and financial news.
//!
//! This library provides the core functionality behind the `fintrack` binary:
//! - `view` - pure table state (search, sort, pagination) with no UI dependency
//! - `convert` - currency conversion against USD-relative rates
//! - `feed` - news feed state with pluggable page sources (mock or HTTP)
//! - `rates` - rate data model and loading
//! - `tui` - interactive terminal frontend

pub mod convert;
pub mod feed;
pub mod rates;
pub mod tui;
pub mod view;
