//! Act Downloads
//!
//! Downloading an act changes the deal's status on the server, so the page is
//! refreshed a fixed delay after the download starts. Nothing signals that the
//! file actually arrived.

use tracing::{debug, error};

use crate::config::{DownloadConfig, Labels};
use crate::page::{Button, Page};

pub const URL_ATTR: &str = "url";

/// Start the download behind `button` and schedule the refresh. Returns
/// `false` when the button carries no URL.
pub fn start<Btn, P>(button: &Btn, page: &P, config: &DownloadConfig, labels: &Labels) -> bool
where
    Btn: Button,
    P: Page,
{
    let Some(url) = button.data(URL_ATTR).filter(|url| !url.trim().is_empty()) else {
        error!("download url is missing from button data attribute");
        return false;
    };
    button.set_disabled(true);
    button.set_label(&labels.downloading);
    debug!(%url, "starting act download");
    page.navigate(&url);
    page.refresh_after(config.refresh_delay_ms);
    true
}
