#![no_main]

use libfuzzer_sys::fuzz_target;
use protowire::core::{length_delimited, varint};

// Decoding arbitrary bytes must only ever return a value or a typed error.
fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = varint::decode(data, 0) {
        assert!(consumed >= 1 && consumed <= data.len());
        // The canonical re-encoding is never longer than what was consumed
        // (the input may have been padded; emission is always minimal).
        let size = varint::calc_size(&value);
        assert!(size <= consumed);

        let mut buf = vec![0u8; size];
        let end = varint::encode(&mut buf, &value, 0).expect("re-encode");
        let (reread, _) = varint::decode(&buf[..end], 0).expect("re-decode");
        assert_eq!(reread, value);
    }

    if let Ok((payload, consumed)) = length_delimited::decode(data, 0) {
        assert!(!payload.is_empty());
        assert!(consumed <= data.len());
    }
});
