#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn display_timestamp_formats_epoch() {
    assert_eq!(display_timestamp(0), "01/01/1970, 00:00:00");
}

#[test]
fn display_timestamp_drops_sub_second_precision() {
    assert_eq!(display_timestamp(1_700_000_000_999), "11/14/2023, 22:13:20");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[test]
fn now_ms_does_not_go_backwards() {
    let first = now_ms();
    let second = now_ms();
    assert!(second >= first);
}
