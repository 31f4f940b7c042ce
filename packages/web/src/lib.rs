//! Product scrape page - Dioxus web frontend
//!
//! Submits a URL to the server's `/scrape` endpoint and renders the returned
//! products, with inline validation, a loading indicator, error display and a
//! CSV download.
//!
//! The submit logic ([`handler`]) is plain Rust over the [`state::PageView`]
//! and [`client::ScrapeClient`] seams; the Dioxus components only wire signals
//! to it.

#![allow(non_snake_case)]

pub mod app;
pub mod client;
pub mod components;
pub mod download;
pub mod handler;
pub mod pages;
pub mod routes;
pub mod state;
pub mod testing;
pub mod validation;

pub use client::{HttpScrapeClient, ScrapeClient, ScrapeReply};
pub use handler::{submit, SubmitOutcome};
pub use state::{PageState, PageView, Results};
