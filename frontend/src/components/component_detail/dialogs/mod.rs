pub mod review;
pub mod update;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Reads the first selected file of an `<input type="file">` change event.
pub(super) fn first_file(e: &Event) -> Option<web_sys::File> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.files().and_then(|files| files.get(0))
}
