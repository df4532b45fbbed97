//! Social share deep links.
//!
//! Pure URL producers, the same family as the calendar deep links: the
//! embedding UI decides when to open them.

use url::Url;

use crate::error::WhatsOnResult;

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const WHATSAPP_SHARE: &str = "https://wa.me/";
const TELEGRAM_SHARE: &str = "https://t.me/share/url";

/// Facebook sharer link for a page URL.
pub fn facebook_share_url(page_url: &str) -> WhatsOnResult<String> {
    let mut url = Url::parse(FACEBOOK_SHARER)?;
    url.query_pairs_mut().append_pair("u", page_url);
    Ok(url.into())
}

/// WhatsApp share link; `text` is prepended to the URL when given.
pub fn whatsapp_share_url(page_url: &str, text: Option<&str>) -> WhatsOnResult<String> {
    let message = match text {
        Some(text) => format!("{text} {page_url}"),
        None => page_url.to_string(),
    };
    let mut url = Url::parse(WHATSAPP_SHARE)?;
    url.query_pairs_mut().append_pair("text", &message);
    Ok(url.into())
}

/// Telegram share link with optional accompanying text.
pub fn telegram_share_url(page_url: &str, text: Option<&str>) -> WhatsOnResult<String> {
    let mut url = Url::parse(TELEGRAM_SHARE)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("url", page_url);
        if let Some(text) = text {
            query.append_pair("text", text);
        }
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facebook_share_url() {
        let url = facebook_share_url("https://example.com/events/fira").unwrap();
        assert_eq!(
            url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fevents%2Ffira"
        );
    }

    #[test]
    fn test_whatsapp_share_prepends_text() {
        let url = whatsapp_share_url("https://example.com/e/1", Some("Fira del Llibre")).unwrap();
        assert_eq!(
            url,
            "https://wa.me/?text=Fira+del+Llibre+https%3A%2F%2Fexample.com%2Fe%2F1"
        );
    }

    #[test]
    fn test_whatsapp_share_without_text() {
        let url = whatsapp_share_url("https://example.com/e/1", None).unwrap();
        assert_eq!(url, "https://wa.me/?text=https%3A%2F%2Fexample.com%2Fe%2F1");
    }

    #[test]
    fn test_telegram_share_url() {
        let url = telegram_share_url("https://example.com/e/1", Some("Fira")).unwrap();
        assert_eq!(
            url,
            "https://t.me/share/url?url=https%3A%2F%2Fexample.com%2Fe%2F1&text=Fira"
        );
    }
}
