pub mod dialogs;
pub mod member_bar;
pub mod theme;
pub mod timeline_chart;
pub mod toolbar;
