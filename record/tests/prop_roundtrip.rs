use proptest::prelude::*;
use record::{
    decode_bricks, decode_cubes, encode_bricks, encode_cubes, Brick, Cube, DecodeError, Limits,
    TailPolicy, Vec3f, Vec3i,
};

fn cube_strategy() -> impl Strategy<Value = Cube> {
    (
        (-1_000_000i32..1_000_000, -1_000_000i32..1_000_000, -1_000_000i32..1_000_000),
        0i32..31,
        any::<[i32; 8]>(),
    )
        .prop_map(|((x, y, z), level, scalar_ids)| Cube {
            lower: Vec3f::new(x as f32, y as f32, z as f32),
            level,
            scalar_ids,
        })
}

fn brick_strategy() -> impl Strategy<Value = Brick> {
    (
        any::<(i32, i32, i32)>(),
        any::<i32>(),
        (0i32..4, 0i32..4, 0i32..4),
    )
        .prop_flat_map(|((x, y, z), level, (nx, ny, nz))| {
            let count = ((nx + 1) * (ny + 1) * (nz + 1)) as usize;
            prop::collection::vec(any::<i32>(), count).prop_map(move |scalar_ids| Brick {
                lower: Vec3i::new(x, y, z),
                level,
                num_cubes: Vec3i::new(nx, ny, nz),
                scalar_ids,
            })
        })
}

proptest! {
    #[test]
    fn prop_cubes_roundtrip(cubes in prop::collection::vec(cube_strategy(), 0..32)) {
        let bytes = encode_cubes(&cubes);
        prop_assert_eq!(bytes.len(), cubes.len() * record::CUBE_RECORD_SIZE);
        let decoded = decode_cubes(&bytes, &Limits::unlimited()).unwrap();
        prop_assert_eq!(decoded, cubes);
    }

    #[test]
    fn prop_bricks_roundtrip(bricks in prop::collection::vec(brick_strategy(), 0..16)) {
        let bytes = encode_bricks(&bricks).unwrap();
        let decoded = decode_bricks(&bytes, &Limits::unlimited(), TailPolicy::Strict).unwrap();
        prop_assert_eq!(decoded.bricks, bricks);
    }

    #[test]
    fn prop_truncated_brick_stream(
        bricks in prop::collection::vec(brick_strategy(), 1..8),
        cut in 1usize..200,
    ) {
        let bytes = encode_bricks(&bricks).unwrap();
        let cut = cut.min(bytes.len());
        let short = &bytes[..bytes.len() - cut];

        let lenient = decode_bricks(short, &Limits::unlimited(), TailPolicy::Lenient).unwrap();
        prop_assert!(lenient.bricks.len() < bricks.len());
        prop_assert_eq!(&lenient.bricks[..], &bricks[..lenient.bricks.len()]);

        let strict = decode_bricks(short, &Limits::unlimited(), TailPolicy::Strict);
        if lenient.discarded_bytes == 0 {
            prop_assert!(strict.is_ok());
        } else {
            let is_truncated = matches!(strict, Err(DecodeError::Truncated { .. }));
            prop_assert!(is_truncated);
        }
    }
}
