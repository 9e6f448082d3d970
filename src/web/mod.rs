//! Server-rendered HTML pages.
//!
//! Pages are Askama templates under `templates/`, all extending `base.html`.
//! Interactive state (carousel slide, selected model) travels in query
//! parameters, so every view is a plain link.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers and their templates
//! - [`routes`] - Page route configuration
//! - [`view`] - Layout data and helpers shared by the pages

pub mod handlers;
pub mod routes;
pub mod view;
