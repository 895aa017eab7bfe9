//! Display-time helpers. Chat timestamps and form date defaults only —
//! cache freshness uses `store::time` instead.

/// Local wall-clock time as `HH:MM`, for message timestamps.
#[cfg(target_arch = "wasm32")]
pub fn clock_time() -> String {
    let date = js_sys::Date::new_0();
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Today's date as `YYYY-MM-DD`, the transaction form default.
#[cfg(target_arch = "wasm32")]
pub fn today_iso() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_iso_shaped() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }

    #[test]
    fn clock_time_is_hh_mm() {
        let now = clock_time();
        assert_eq!(now.len(), 5);
        assert_eq!(&now[2..3], ":");
    }
}
