//! Scrape page component

use dioxus::prelude::*;

use crate::components::{DownloadLink, LoadingIndicator, ProductCard};
use crate::handler::{begin_submit, finish_submit, NO_PRODUCTS_MESSAGE};
use crate::state::{PageState, Results};

/// Scrape page - submit a product listing URL and show what was found
#[component]
pub fn ScrapePage() -> Element {
    let page = use_signal(PageState::default);

    rsx! {
        ScrapeView { page }
    }
}

/// Form, status and results for the page state held in `page`
#[component]
pub fn ScrapeView(mut page: Signal<PageState>) -> Element {
    let mut url = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Validation and the loading flag happen here, synchronously, so a
        // second submit before the task runs is already refused
        let request = match begin_submit(&mut page, &url()) {
            Ok(request) => request,
            Err(_) => return,
        };

        spawn(async move {
            let result = scrape(request).await;
            finish_submit(&mut page, result);
        });
    };

    let state = page.read();
    let products = state.results.products().to_vec();
    let error_text = state.error.clone().unwrap_or_default();

    rsx! {
        main {
            class: "container",

            h1 { "Product Scraper" }
            p {
                class: "subtitle",
                "Paste a product listing URL to pull out names, prices and ratings."
            }

            form {
                id: "scrape-form",
                onsubmit: handle_submit,

                input {
                    id: "url",
                    name: "url",
                    r#type: "text",
                    value: "{url}",
                    oninput: move |e| url.set(e.value()),
                    placeholder: "https://www.example.com/s?k=desk+lamp",
                }
                button {
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Scraping..." } else { "Scrape" }
                }
            }

            div {
                id: "error-message",
                class: "error",
                hidden: state.error.is_none(),
                "{error_text}"
            }

            LoadingIndicator { visible: state.loading }

            div {
                id: "results",
                class: "results",
                if state.results == Results::Empty {
                    p { "{NO_PRODUCTS_MESSAGE}" }
                }
                for (i, product) in products.into_iter().enumerate() {
                    ProductCard { key: "{i}", product }
                }
            }

            DownloadLink { download: state.download.clone() }
        }
    }
}

async fn scrape(
    request: scrape_protocol::ScrapeRequest,
) -> Result<crate::client::ScrapeReply, crate::client::ClientError> {
    use crate::client::ScrapeClient;

    #[cfg(feature = "web")]
    let client = crate::client::browser_client();
    #[cfg(not(feature = "web"))]
    let client = crate::client::HttpScrapeClient::new(crate::client::scrape_endpoint());

    client.scrape(&request).await
}
