//! CSV download link target

use scrape_protocol::CSV_FILE_NAME;

/// CSV text returned by the server, offered to the user as a file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDownload {
    pub file_name: &'static str,
    pub contents: String,
}

impl CsvDownload {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            file_name: CSV_FILE_NAME,
            contents: contents.into(),
        }
    }

    /// `href` for the download anchor.
    ///
    /// In the browser this is an object URL for a `text/csv` Blob. Falls back
    /// to a `data:` URL when no Blob can be made (or outside the browser).
    pub fn href(&self) -> String {
        #[cfg(feature = "web")]
        {
            if let Some(url) = self.object_url() {
                return url;
            }
        }
        self.data_url()
    }

    pub fn data_url(&self) -> String {
        format!(
            "data:text/csv;charset=utf-8,{}",
            urlencoding::encode(&self.contents)
        )
    }

    #[cfg(feature = "web")]
    fn object_url(&self) -> Option<String> {
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&self.contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
        web_sys::Url::create_object_url_with_blob(&blob).ok()
    }
}

/// Release an object URL made by [`CsvDownload::href`]. `data:` URLs are left alone.
pub fn revoke_href(href: &str) {
    #[cfg(feature = "web")]
    {
        if href.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(href);
        }
    }
    #[cfg(not(feature = "web"))]
    let _ = href;
}
