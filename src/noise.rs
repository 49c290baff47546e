// Seeded 1-D value noise for the bubble sway. Smooth in the sample position,
// so consecutive phases give drift rather than jitter.

fn hash_u32(mut x: u32) -> u32 {
    // xorshift-ish
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846ca68b);
    x ^= x >> 16;
    x
}

fn hash1(x: i32, seed: u32) -> u32 {
    hash_u32(seed ^ (x as u32).wrapping_mul(0x9e3779b1))
}

fn rand01_from_hash(h: u32) -> f32 {
    // 24-bit mantissa style
    ((h & 0x00FF_FFFF) as f32) / 16_777_215.0
}

fn fade(t: f32) -> f32 {
    // smoothstep-ish
    t * t * (3.0 - 2.0 * t)
}

// Output in [0,1].
pub fn noise1(x: f32, seed: u32) -> f32 {
    let xi = x.floor() as i32;
    let xf = x - xi as f32;

    let h0 = rand01_from_hash(hash1(xi, seed));
    let h1 = rand01_from_hash(hash1(xi + 1, seed));

    h0 + (h1 - h0) * fade(xf)
}
