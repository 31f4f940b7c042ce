//! Page state behind the scrape form

use dioxus::prelude::*;
use scrape_protocol::Product;

use crate::download::CsvDownload;

/// What the results area currently shows
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Results {
    /// Nothing submitted yet, or cleared for a new submit
    #[default]
    Idle,
    /// Successful scrape that found nothing
    Empty,
    Products(Vec<Product>),
}

impl Results {
    pub fn products(&self) -> &[Product] {
        match self {
            Results::Products(products) => products,
            Results::Idle | Results::Empty => &[],
        }
    }
}

/// Everything the scrape page renders
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PageState {
    pub loading: bool,
    pub error: Option<String>,
    pub results: Results,
    pub download: Option<CsvDownload>,
}

impl PageState {
    /// Drop the outcome of the previous submit
    pub fn clear(&mut self) {
        self.error = None;
        self.results = Results::Idle;
        self.download = None;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

/// Where the submit handler writes its results.
///
/// Implemented for a plain [`PageState`] and for the Dioxus signal holding one.
pub trait PageView {
    fn is_loading(&self) -> bool;

    fn update(&mut self, f: impl FnOnce(&mut PageState));
}

impl PageView for PageState {
    fn is_loading(&self) -> bool {
        self.loading
    }

    fn update(&mut self, f: impl FnOnce(&mut PageState)) {
        f(self)
    }
}

impl PageView for Signal<PageState> {
    fn is_loading(&self) -> bool {
        self.peek().loading
    }

    fn update(&mut self, f: impl FnOnce(&mut PageState)) {
        f(&mut self.write())
    }
}
