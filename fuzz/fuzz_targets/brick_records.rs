#![no_main]

use canon::{canonical_sort, compare_sorted, is_canonical};
use libfuzzer_sys::fuzz_target;
use record::{decode_bricks, encode_bricks, Limits, TailPolicy};

fuzz_target!(|data: &[u8]| {
    let limits = Limits::for_testing();
    let strict = decode_bricks(data, &limits, TailPolicy::Strict);
    let Ok(lenient) = decode_bricks(data, &limits, TailPolicy::Lenient) else {
        // Lenient only forgives truncation, so strict must fail too.
        assert!(strict.is_err());
        return;
    };

    match strict {
        Ok(decoded) => {
            assert_eq!(decoded, lenient);
            // Every decoded brick re-encodes to the exact input.
            let bytes = encode_bricks(&decoded.bricks).expect("decoded bricks encode");
            assert_eq!(bytes.as_slice(), data);
        }
        Err(_) => assert!(lenient.discarded_bytes > 0),
    }

    let mut bricks = lenient.bricks;
    canonical_sort(&mut bricks);
    assert!(is_canonical(&bricks));
    assert!(compare_sorted(&bricks, &bricks).is_match());
});
