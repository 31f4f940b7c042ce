//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::ScrapePage;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    ScrapePage {},
}
