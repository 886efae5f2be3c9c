#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    lcs_diff_rs::fuzz::fuzz(data.0, data.1);
});
