//! Recorded reference outputs
//!
//! Each vector pins the exact RGBA bytes (by SHA-256) an effect produces for a
//! fixed sprite and seed. Only effects whose arithmetic avoids trigonometry
//! are pinned, so the hashes do not depend on the platform math library.

use sha2::{Digest, Sha256};
use spritefx::{transform, PixelBuffer};

/// 9x7 ellipse with a one-pixel hole, two translucent-but-opaque diagonals
/// (alpha 60) and a sub-threshold speck in the corner.
fn fixture() -> PixelBuffer {
    let (w, h) = (9u32, 7u32);
    let mut data = vec![0u8; (w * h * 4) as usize];
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let i = ((y as u32 * w + x as u32) * 4) as usize;
            let inside = 9 * (x - 4).pow(2) + 16 * (y - 3).pow(2) <= 144;
            let hole = x == 4 && y == 3;
            if inside && !hole {
                data[i] = ((x * 29 + y * 7) % 256) as u8;
                data[i + 1] = ((x * 13 + y * 31) % 256) as u8;
                data[i + 2] = ((x * 5 + y * 17 + 90) % 256) as u8;
                data[i + 3] = if (x + y) % 5 == 0 { 60 } else { 255 };
            } else if x == 0 && y == 0 {
                data[i..i + 4].copy_from_slice(&[10, 10, 10, 20]);
            }
        }
    }
    PixelBuffer::from_rgba(w, h, data).unwrap()
}

fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes).iter().map(|b| format!("{:02x}", b)).collect()
}

struct Vector {
    effect: &'static str,
    seed: i64,
    width: u32,
    height: u32,
    opaque: usize,
    sha256: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector { effect: "spikes", seed: 42, width: 33, height: 31, opaque: 58, sha256: "1aef0c229806abcfdfa18f6d80349990f57c4d25cbfece4c46e67a752aa044f2" },
    Vector { effect: "spikes", seed: 7, width: 33, height: 31, opaque: 37, sha256: "a03b928d47d9a576198ceb2d05c5514346178e0a861c70fc9cf7e4b0b9903956" },
    Vector { effect: "spikes", seed: 123456789, width: 33, height: 31, opaque: 38, sha256: "a3e2a506d59f400c6de8d69a5d860ffa73807b15d1f45365eadaadd59ec08a06" },
    Vector { effect: "spikes", seed: -5, width: 33, height: 31, opaque: 46, sha256: "ab663bf87a8f38d7d5bf55a2bcf49db44b8bab039d0801fd337f9f8d3c6e7a1c" },
    Vector { effect: "frozen", seed: 42, width: 37, height: 35, opaque: 102, sha256: "b83b840445dafd5f184a6033dbbc07f8c45f3b8882a65869245fe50cba335338" },
    Vector { effect: "frozen", seed: 7, width: 37, height: 35, opaque: 75, sha256: "807787a4449a9c9ce213449ffc6d16b44a37cb8ffd21b2dcaef3a68aed1f967c" },
    Vector { effect: "frozen", seed: 123456789, width: 37, height: 35, opaque: 81, sha256: "ad080ef96b4f93d7076fd9ab2dd61aa06ce86607d38530080fb002699e3548e0" },
    Vector { effect: "frozen", seed: -5, width: 37, height: 35, opaque: 81, sha256: "8161b76891a5582f5ee404a409a37f5e996135706aba569a9b8717adb3d63039" },
    Vector { effect: "electric", seed: 42, width: 33, height: 31, opaque: 82, sha256: "2c33e73d1df6e477654e59f88c9569f9c43791107628ee7c157af3b8d04e73e6" },
    Vector { effect: "electric", seed: 7, width: 33, height: 31, opaque: 91, sha256: "6399cc07fbaed613f97d42e8caf82bcbd366f4597778f7bb9294370a45557b4a" },
    Vector { effect: "electric", seed: 123456789, width: 33, height: 31, opaque: 121, sha256: "63fb694e11c8be3182c69c6db3e6eb3460afb395fee8e7932edae286cbac094c" },
    Vector { effect: "electric", seed: -5, width: 33, height: 31, opaque: 94, sha256: "649cdb7f89febc6cd8214fb098036220a931a032418cd8150acdfa0045c43c3a" },
    Vector { effect: "corruption", seed: 42, width: 29, height: 27, opaque: 41, sha256: "b590d76895c119c5c40cd4dcc261c4967866e3273ece4eaf0ba9c4512b418ffb" },
    Vector { effect: "corruption", seed: 7, width: 29, height: 27, opaque: 39, sha256: "846f0f9cc7c861952259d42a2788bd54239b5013925eb2bff972b25ec6113573" },
    Vector { effect: "corruption", seed: 123456789, width: 29, height: 27, opaque: 46, sha256: "fc77cf72ef0d99ed7e32d30a95250ea94cbe4ba6dbfb1f0b2c80c90ebf4ab229" },
    Vector { effect: "corruption", seed: -5, width: 29, height: 27, opaque: 48, sha256: "d3b378411a0fcc174ed9b504598e821b4e2a41c09a31efaeba85aff5fa806700" },
    Vector { effect: "stone", seed: 42, width: 21, height: 19, opaque: 36, sha256: "17c23859fdb8b007d8c4c5b668e5cf3ea57c505381121f49c80cf3d5bd57fed2" },
    Vector { effect: "stone", seed: 7, width: 21, height: 19, opaque: 39, sha256: "afc73d1537151533d855f02644d55582e4702e69b28777113afe23c12ef1fc3d" },
    Vector { effect: "stone", seed: 123456789, width: 21, height: 19, opaque: 40, sha256: "820de42b7c7819459f88b5be8c27f467da37616c2d2902ed68ba92a2721789df" },
    Vector { effect: "stone", seed: -5, width: 21, height: 19, opaque: 40, sha256: "a6e0090e6d4900f6338ca1746866104318c41807a9560b48fb3e8eeaf3e2bfbd" },
    Vector { effect: "shadow", seed: 42, width: 29, height: 27, opaque: 138, sha256: "2ac044359f034d0c972c43b0141d28227da3329115ff899b3567f6c403d37488" },
    Vector { effect: "shadow", seed: 7, width: 29, height: 27, opaque: 136, sha256: "05d1712fde2f4cfcb4a662706bae0cf9ff13defbbb81c69f0c1f55b2c53f3eb4" },
    Vector { effect: "shadow", seed: 123456789, width: 29, height: 27, opaque: 153, sha256: "abb6c570ebd16cbd9483421d498f32b066f4b599def5128b6767031c033748ed" },
    Vector { effect: "shadow", seed: -5, width: 29, height: 27, opaque: 148, sha256: "4688765418d575fb7aa23821cad7cb3d113702c41cdf026e6ebd388d4d83a714" },
];

#[test]
fn test_recorded_vectors() {
    let sprite = fixture();
    for v in VECTORS {
        let out = transform(&sprite, v.effect, v.seed).unwrap();
        let label = format!("{} seed {}", v.effect, v.seed);
        assert_eq!((out.width(), out.height()), (v.width, v.height), "{}", label);
        assert_eq!(out.opaque_count(), v.opaque, "{}", label);
        assert_eq!(sha256_hex(out.as_bytes()), v.sha256, "{}", label);
    }
}

#[test]
fn test_single_white_pixel_spikes_seed_42() {
    let sprite = PixelBuffer::filled(1, 1, [255, 255, 255, 255]);
    let out = transform(&sprite, "spikes", 42).unwrap();

    assert_eq!((out.width(), out.height()), (25, 25));
    for y in 0..25 {
        for x in 0..25 {
            let expected = if (x, y) == (12, 12) { [234, 153, 153, 255] } else { [0, 0, 0, 0] };
            assert_eq!(out.get(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
    assert_eq!(
        sha256_hex(out.as_bytes()),
        "2bce6e06ebe80e6c2232c4713eec08d51c5ee8a17ba14594f86af2b7cbbca943"
    );
}
