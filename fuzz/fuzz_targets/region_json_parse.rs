//! Fuzz target for region JSON parsing and geometry.
//!
//! This fuzzer feeds arbitrary byte sequences to the region JSON parser and
//! runs the geometry functions over whatever parses, checking for panics,
//! crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use regionkit::geometry::{compute_enclosing_box, offset_region, translate_region};
use regionkit::region::io_json::from_json_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(regions) = from_json_slice(data) else {
        return;
    };
    for region in &regions {
        let _ = compute_enclosing_box(region);
        let _ = translate_region(region, 1.0, 1.0);
        let _ = offset_region(region, -1.0, 1.0);
    }
});
