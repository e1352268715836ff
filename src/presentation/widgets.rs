//! Reusable widgets
//!
//! Small building blocks shared by the components: floating popups, the
//! paging controls and the status bar.

pub mod pager;
pub mod popup;
pub mod status_bar;
