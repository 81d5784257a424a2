#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // A NUL byte separates the reference from the candidate
    let (reference, candidate) = text.split_once('\0').unwrap_or((text, text));
    let _ = jsonequaliser::is_compatible(reference, candidate);

    if let Ok(node) = jsonequaliser::normalize(reference) {
        assert!(jsonequaliser::is_compatible_values(&node, &node));
        let mut visited = 0_usize;
        assert!(jsonequaliser::is_compatible_values_with_tracing(
            &node,
            &node,
            &mut |_| visited += 1
        ));
        assert!(visited > 0);
    }
});
