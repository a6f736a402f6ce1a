#![no_main]

use libfuzzer_sys::fuzz_target;
use record::{decode_cubes, encode_cubes, Brick, Limits, CUBE_RECORD_SIZE};

fuzz_target!(|data: &[u8]| {
    let Ok(cubes) = decode_cubes(data, &Limits::for_testing()) else {
        return;
    };
    assert_eq!(cubes.len() * CUBE_RECORD_SIZE, data.len());

    // NaN coordinates do not survive a float comparison, so check bytes.
    assert_eq!(encode_cubes(&cubes).as_slice(), data);

    for cube in cubes {
        let _ = Brick::try_from(cube);
    }
});
