//! Wall-clock label for the dashboard "last updated" badge.
//!
//! TRADE-OFFS
//! ==========
//! The browser's locale time is only available after hydration; SSR and
//! native test builds return a placeholder so server output stays
//! deterministic.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Local time of day, e.g. `"2:41:07 PM"`.
pub fn local_time_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "--:--:--".to_owned()
    }
}
