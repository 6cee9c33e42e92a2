#![allow(non_snake_case)]

pub mod assets;
pub mod render;
pub mod views;
pub mod vm;

pub use render::{Page, render_page};
