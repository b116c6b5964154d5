use crate::content::MessagingLink;
use log::{info, warn};
use web_sys::window;

/// Builds the chat deep link. `encoded_text` must already be percent-encoded;
/// `None` leaves the `text` parameter empty.
pub fn deep_link(link: &MessagingLink, encoded_text: Option<&str>) -> String {
    format!(
        "{}?phone={}&text={}&type=phone_number&app_absent=0&utm_source=ig",
        link.base_url,
        urlencoding::encode(link.phone.trim()),
        encoded_text.unwrap_or_default()
    )
}

/// Opens the deep link in a new browsing context.
pub fn open_messaging(link: &MessagingLink, encoded_text: Option<&str>) {
    let url = deep_link(link, encoded_text);
    let Some(window) = window() else {
        warn!("No window available, cannot open messaging link");
        return;
    };
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => info!("Opened messaging link (summary attached: {})", encoded_text.is_some()),
        Ok(None) => warn!("Messaging link was blocked by the browser"),
        Err(e) => warn!("Failed to open messaging link: {:?}", e),
    }
}
