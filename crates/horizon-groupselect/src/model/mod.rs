//! Selection model for grouped multi-selects.
//!
//! This module holds the data side of the widget: what can be selected, how
//! it is grouped, and what is currently selected.
//!
//! # Core Types
//!
//! - `ItemId`: Normalized identifier of a value or group
//! - `Value` / `Group`: The selectable items and their containers
//! - `Selection`: An initial selection request ("all" or explicit ids)
//! - `GroupList`: The selection state and every query derived from it
//! - `GroupListBuilder`: Builds a `GroupList` from flat values and groups
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ GroupListBuilder │────>│  GroupList  │────>│   Signals   │
//! │  (flat config)   │     │ (selection) │     │  (changes)  │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!                                ▲
//!                                │ toggle_value / toggle_group / toggle_all
//!                          ┌─────────────┐
//!                          │   Widget    │
//!                          └─────────────┘
//! ```

mod builder;
mod check_state;
mod group;
mod group_list;
mod id;
mod selection;

pub use builder::{GroupListBuilder, NO_GROUP_ID};
pub use check_state::CheckState;
pub use group::{GROUPLESS_ID, Group, GroupKind, Value};
pub use group_list::{
    ALL_DESCRIPTION, DESCRIPTION_ELLIPSIS, DESCRIPTION_MAX_CHARS, DESCRIPTION_SEPARATOR,
    DESCRIPTION_TRUNCATED_CHARS, GroupList, NONE_DESCRIPTION, truncate_description,
};
pub use id::ItemId;
pub use selection::{ALL_KEYWORD, Selection};
