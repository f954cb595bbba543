//! Dashboard aggregation engine
//!
//! Derives widget data (scalar counts and grouped frequency tables) from
//! ticket and user collections, driven by a declarative per-role widget
//! configuration. Pure functions of their inputs; no external state.

mod config;
mod engine;

pub use config::{widgets_for_role, DataSource, GroupKey, Metric, WidgetKind, WidgetQuery, WidgetSpec};
pub use engine::{compute_metric, group_frequencies, render, GroupBucket, WidgetData, WidgetValue};
