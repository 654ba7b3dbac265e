//! Demo site that keeps the page head in sync with the view on screen.

#![allow(non_snake_case)]

pub mod head;
pub mod metadata;
pub mod state;
pub mod views;
