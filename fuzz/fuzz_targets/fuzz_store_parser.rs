//! Fuzz target for config and store-dump parsing.
//!
//! Goal: the parsers should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_store_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(store) = consentgate_settings::parse_store_json(text) {
        let _ = store.to_consent_input();
    }

    if let Ok(cfg) = consentgate_settings::parse_config_toml(text) {
        let _ = consentgate_settings::resolve_config(
            cfg,
            None,
            consentgate_settings::Overrides::default(),
        );
    }
});
