//! Test fixtures: listing pages and product lists.

#![allow(dead_code)]

use scrape_protocol::Product;

/// Two full result rows, one row missing price and rating, and a banner
/// that is not a result row.
pub const LISTING_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="banner">Deals of the day</div>
  <div class="s-result-item">
    <h2><a href="/dp/1"><span>Adjustable Desk Lamp</span></a></h2>
    <span class="a-price"><span class="a-price-whole">24.</span><span class="a-price-fraction">99</span></span>
    <i class="a-icon-star"><span class="a-icon-alt">4.6 out of 5 stars</span></i>
  </div>
  <div class="s-result-item">
    <h2><a href="/dp/2"><span>Floor Lamp, "Arc" Edition</span></a></h2>
    <span class="a-price"><span class="a-price-whole">1,299.</span></span>
    <i class="a-icon-star"><span class="a-icon-alt">3.9 out of 5 stars</span></i>
  </div>
  <div class="s-result-item">
    <h2><a href="/dp/3"><span>Clip Light</span></a></h2>
  </div>
</body>
</html>
"#;

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Desk Lamp", "24.", "4.6 out of 5 stars"),
        Product::new("Floor Lamp", "89.", "No Rating"),
    ]
}
