//! Product card component

use dioxus::prelude::*;
use scrape_protocol::Product;

/// One scraped product: name, price, rating
#[component]
pub fn ProductCard(product: Product) -> Element {
    rsx! {
        div {
            class: "product",
            h2 { "{product.name}" }
            p { "Price: {product.price}" }
            p { "Rating: {product.rating}" }
        }
    }
}
