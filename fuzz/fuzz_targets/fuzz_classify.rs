#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use stylewatch::{classify, derive_output_path, SourceKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let path = Path::new(raw);
        let kind = classify(path);
        let output = derive_output_path(path, kind);

        // Every compilable path has an output next to it; nothing else does
        assert_eq!(output.is_some(), kind != SourceKind::Unrelated);
        if let Some(output) = output {
            assert_eq!(output.parent(), path.parent());
            assert_eq!(classify(&output), SourceKind::Unrelated);
        }
    }
});
