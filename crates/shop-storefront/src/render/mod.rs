//! HTML fragments for the storefront page.

mod facets;
mod products;

pub use facets::{render_cart_badge, render_facet_panel, render_load_error};
pub use products::{render_product_card, render_product_grid, EMPTY_STATE_MESSAGE};

/// Page that opens a product's details.
pub const DETAIL_PAGE: &str = "ChiTietSanPham.html";

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub(crate) fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"Dior" & 'Co'</b>"#),
            "&lt;b&gt;&quot;Dior&quot; &amp; &#39;Co&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_urlencoding_encode() {
        assert_eq!(urlencoding_encode("sp-12"), "sp-12");
        assert_eq!(urlencoding_encode("a b&c"), "a%20b%26c");
        assert_eq!(urlencoding_encode("đ"), "%C4%91");
    }
}
