#![no_main]

use libfuzzer_sys::fuzz_target;
use opgram::extract::{decode_ignoring_invalid, OpExtractor};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes go through the same lossy decoding as trace files
    let text = decode_ignoring_invalid(data);

    if let Ok(extractor) = OpExtractor::new() {
        // Extraction should not panic regardless of input
        let _ = extractor.extract_ops(&text);
    }
});
