//! Static files served under `/static`.

pub const STYLE_CSS: &str = include_str!("../assets/style.css");
pub const SCRIPT_JS: &str = include_str!("../assets/script.js");
