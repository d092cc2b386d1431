//! Web dashboard layer for browser-based UI.
//!
//! Renders the four panels (Canada, Québec, Scenario, Sources) as HTML
//! pages with inline SVG charts. Uses Askama templates for server-side
//! rendering.
//!
//! # Modules
//!
//! - [`charts`] - SVG bar chart builder
//! - [`handlers`] - Template rendering handlers
//! - [`params`] - Query parameters and their validation
//! - [`routes`] - Dashboard route configuration
//! - [`view`] - Display-ready panel models shared with the terminal report

pub mod charts;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod view;
