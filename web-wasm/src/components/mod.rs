//! UIコンポーネント

pub mod abno_grid;
pub mod controls;
pub mod detail_panel;
pub mod header;
