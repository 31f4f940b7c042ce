//! CSV download link

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::download::{revoke_href, CsvDownload};

/// Anchor that saves the scraped products as `products.csv`.
///
/// Hidden when there is nothing to download.
#[component]
pub fn DownloadLink(download: ReadOnlySignal<Option<CsvDownload>>) -> Element {
    // Last href handed out, so it can be released when replaced
    let issued = use_hook(|| Rc::new(RefCell::new(None::<String>)));

    let href = use_memo({
        let issued = issued.clone();
        move || {
            let next = download.read().as_ref().map(CsvDownload::href);
            if let Some(previous) = issued.replace(next.clone()) {
                revoke_href(&previous);
            }
            next
        }
    });

    use_drop(move || {
        if let Some(last) = issued.borrow_mut().take() {
            revoke_href(&last);
        }
    });

    rsx! {
        div {
            id: "download-link",
            class: "download",
            hidden: href().is_none(),
            a {
                id: "csv-download",
                href: href().unwrap_or_default(),
                download: scrape_protocol::CSV_FILE_NAME,
                "Download CSV"
            }
        }
    }
}
