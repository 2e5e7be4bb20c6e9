//! Plain domain records shared by the data-access layer, the dashboard
//! pipeline and the page templates.

pub mod chart;
pub mod flash;
pub mod post;
pub mod uk_data;
pub mod visit;
