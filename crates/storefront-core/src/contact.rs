//! Messaging deep links for "I want this product" buttons.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::CatalogEntry;

/// WhatsApp click-to-chat address of the business.
pub const DEFAULT_CONTACT_BASE_URL: &str = "https://wa.me/5549920014159";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `<base>?text=<message>` links with a URL-encoded prefilled message.
#[derive(Debug, Clone)]
pub struct ContactLinkBuilder {
    base_url: String,
}

impl Default for ContactLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACT_BASE_URL)
    }
}

impl ContactLinkBuilder {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Purchase-inquiry link for `entry`.
    ///
    /// `name` and `price` are interpolated verbatim; the only escaping is the
    /// URL encoding of the whole message.
    #[must_use]
    pub fn product_link(&self, entry: &CatalogEntry) -> String {
        self.general_link(&product_message(&entry.name, &entry.price))
    }

    /// Link that opens a chat with `message` prefilled.
    #[must_use]
    pub fn general_link(&self, message: &str) -> String {
        let encoded = utf8_percent_encode(message, URI_COMPONENT);
        format!("{}?text={encoded}", self.base_url)
    }
}

/// Message template for a purchase inquiry.
#[must_use]
pub fn product_message(name: &str, price: &str) -> String {
    format!(
        "Olá! Gostaria de adquirir o produto: *{name}* por {price}. \
         Podem me ajudar com mais informações?"
    )
}
