//! UI panel rendering subsystem
//!
//! - Navigation bar (section link, dataset picker, theme toggle)
//! - Education panel (header, spinner or timeline)
//! - Status bar (layout, endpoint, record count)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod education_panel;
pub mod status_bar;
pub mod panel_manager;
