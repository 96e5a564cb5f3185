// Terminal browser for the Star Wars API character roster. The binary in
// main.rs only owns the terminal and the event loop; everything it drives
// lives here so integration tests can exercise it without a tty.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod event;
pub mod fetcher;
pub mod logging;
pub mod roster;
pub mod screen;
pub mod source;
pub mod ui;

/// Locales bundled with the binary.
pub fn available_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|locale| locale.to_string())
        .collect()
}
