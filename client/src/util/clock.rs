//! Wall-clock reading and display formatting for message timestamps.
//!
//! The browser path goes through `js_sys::Date` (`SystemTime` is unavailable
//! on `wasm32-unknown-unknown`) and renders with the visitor's locale. Server
//! rendering and native tests fall back to a fixed UTC layout.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}

/// Human-readable timestamp for `ms` since the epoch.
#[allow(clippy::cast_precision_loss)]
pub fn display_timestamp(ms: u64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
        date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
            .ok()
            .and_then(|dt| {
                dt.format(time::macros::format_description!(
                    "[month]/[day]/[year], [hour]:[minute]:[second]"
                ))
                .ok()
            })
            .unwrap_or_default()
    }
}
