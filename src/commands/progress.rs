//! Spinner shown while an index is loaded or rebuilt

use crate::source::LoadError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Run `load` behind a stderr spinner labelled `message`
pub(crate) fn with_spinner<T, F>(message: &'static str, load: F) -> Result<T, LoadError>
where
    F: FnOnce() -> Result<T, LoadError>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load();
    spinner.finish_and_clear();
    result
}
