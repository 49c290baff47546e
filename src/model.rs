use crate::noise::noise1;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::{Add, AddAssign, Mul};

pub const BUBBLE_COUNT: usize = 30;
pub const BUBBLE_DIAMETER: (f32, f32) = (50.0, 200.0);
pub const BUBBLE_SPEED: (f32, f32) = (0.5, 2.0);
pub const BUBBLE_FILL_ALPHA: (u8, u8) = (50, 200);
pub const BUBBLE_STAR_ALPHA: (u8, u8) = (150, 255);
pub const SWAY_STRENGTH: f32 = 0.5;
pub const SWAY_STEP: f32 = 0.01;
pub const SWAY_PHASE_SPREAD: f32 = 1000.0;

// Fresh bubbles enter below the bottom edge. The startup stack reaches much
// deeper than steady-state refills so the first wave arrives spread out.
pub const INITIAL_DEPTH: f32 = 500.0;
pub const RESPAWN_DEPTH: f32 = 50.0;

pub const BURST_COUNT: (f32, f32) = (20.0, 50.0);
pub const PARTICLE_SPEED: (f32, f32) = (2.0, 6.0);
pub const PARTICLE_RADIUS: (f32, f32) = (4.0, 8.0);
pub const PARTICLE_ALPHA: (u8, u8) = (255, 255);
pub const PARTICLE_LIFE: i32 = 255;
pub const PARTICLE_FADE: i32 = 8;
pub const PARTICLE_GRAVITY: Vec2 = Vec2 { x: 0.0, y: 0.08 };

pub const STAR_INNER_RATIO: f32 = 0.4;
pub const STAR_POINTS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let f = |a: u8, b: u8| -> u8 {
            ((a as f32) + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: f(self.r, other.r),
            g: f(self.g, other.g),
            b: f(self.b, other.b),
            a: f(self.a, other.a),
        }
    }
}

pub const BACKGROUND: Rgba = Rgba::opaque(0xad, 0xe8, 0xf4);
pub const HUD_TEXT: Rgba = Rgba::opaque(0xeb, 0x64, 0x24);

// Color identity is what scoring compares; the swatch is only how it looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorId {
    Midnight,
    Sapphire,
    Ocean,
    Cerulean,
    Lagoon,
    Sky,
    Spray,
    Powder,
    Foam,
    Blossom,
    Teal,
    Turquoise,
    Opal,
    Mist,
    Mint,
}

impl ColorId {
    pub fn rgb(self) -> Rgba {
        let (r, g, b) = match self {
            ColorId::Midnight => (0x03, 0x04, 0x5e),
            ColorId::Sapphire => (0x02, 0x3e, 0x8a),
            ColorId::Ocean => (0x00, 0x77, 0xb6),
            ColorId::Cerulean => (0x00, 0x96, 0xc7),
            ColorId::Lagoon => (0x00, 0xb4, 0xd8),
            ColorId::Sky => (0x48, 0xca, 0xe4),
            ColorId::Spray => (0x90, 0xe0, 0xef),
            ColorId::Powder => (0xad, 0xe8, 0xf4),
            ColorId::Foam => (0xca, 0xf0, 0xf8),
            ColorId::Blossom => (0xff, 0xc2, 0xd1),
            ColorId::Teal => (0x07, 0xbe, 0xb8),
            ColorId::Turquoise => (0x3d, 0xcc, 0xc7),
            ColorId::Opal => (0x68, 0xd8, 0xd6),
            ColorId::Mist => (0x9c, 0xea, 0xef),
            ColorId::Mint => (0xc4, 0xff, 0xf9),
        };
        Rgba::opaque(r, g, b)
    }
}

pub const BUBBLE_PALETTE: [ColorId; 10] = [
    ColorId::Midnight,
    ColorId::Sapphire,
    ColorId::Ocean,
    ColorId::Cerulean,
    ColorId::Lagoon,
    ColorId::Sky,
    ColorId::Spray,
    ColorId::Powder,
    ColorId::Foam,
    ColorId::Blossom,
];

pub const PARTICLE_PALETTE: [ColorId; 5] = [
    ColorId::Teal,
    ColorId::Turquoise,
    ColorId::Opal,
    ColorId::Mist,
    ColorId::Mint,
];

// The one identity that pays out on pop.
pub const BONUS_COLOR: ColorId = ColorId::Blossom;

// Picks an identity from the palette and rolls an independent alpha for its
// renderable value. One call per tinted attribute.
pub fn random_tint<R: Rng>(
    rng: &mut R,
    palette: &[ColorId],
    alpha: (u8, u8),
) -> (ColorId, Rgba) {
    let id = palette[rng.gen_range(0..palette.len())];
    let a = rng.gen_range(alpha.0..=alpha.1);
    (id, id.rgb().with_alpha(a))
}

pub fn map_range(v: f32, a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    b0 + (v - a0) * (b1 - b0) / (a1 - a0)
}

#[derive(Clone, Copy, Debug)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn from_angle(a: f32) -> Self {
        Self::new(a.cos(), a.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

pub struct Bubble {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    pub color: ColorId,
    pub fill: Rgba,
    pub star: Rgba,
    pub speed: f32,
    pub sway_phase: f32,
}

impl Bubble {
    pub fn new<R: Rng>(rng: &mut R, x: f32, y: f32) -> Self {
        let (color, fill) = random_tint(rng, &BUBBLE_PALETTE, BUBBLE_FILL_ALPHA);
        let (_, star) = random_tint(rng, &BUBBLE_PALETTE, BUBBLE_STAR_ALPHA);
        Self {
            x,
            y,
            diameter: rng.gen_range(BUBBLE_DIAMETER.0..=BUBBLE_DIAMETER.1),
            color,
            fill,
            star,
            speed: rng.gen_range(BUBBLE_SPEED.0..=BUBBLE_SPEED.1),
            sway_phase: rng.gen_range(0.0..SWAY_PHASE_SPREAD),
        }
    }

    pub fn radius(&self) -> f32 {
        self.diameter * 0.5
    }

    pub fn advance(&mut self, noise_seed: u32) {
        self.y -= self.speed;
        let sway = noise1(self.sway_phase, noise_seed) * 2.0 - 1.0;
        self.x += sway * SWAY_STRENGTH;
        self.sway_phase += SWAY_STEP;
    }

    // Strictly inside; a click exactly on the rim misses.
    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        dx * dx + dy * dy < self.radius() * self.radius()
    }

    pub fn is_offscreen(&self) -> bool {
        self.y < -self.radius()
    }

    pub fn burst_count(&self) -> usize {
        map_range(
            self.diameter,
            BUBBLE_DIAMETER.0,
            BUBBLE_DIAMETER.1,
            BURST_COUNT.0,
            BURST_COUNT.1,
        )
        .floor() as usize
    }
}

pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub radius: f32,
    pub life: i32,
    pub fill: Rgba,
}

impl Particle {
    pub fn new<R: Rng>(rng: &mut R, x: f32, y: f32) -> Self {
        let dir = Vec2::from_angle(rng.gen_range(0.0..TAU));
        let (_, fill) = random_tint(rng, &PARTICLE_PALETTE, PARTICLE_ALPHA);
        Self {
            pos: Vec2::new(x, y),
            vel: dir * rng.gen_range(PARTICLE_SPEED.0..=PARTICLE_SPEED.1),
            acc: PARTICLE_GRAVITY,
            radius: rng.gen_range(PARTICLE_RADIUS.0..=PARTICLE_RADIUS.1),
            life: PARTICLE_LIFE,
            fill,
        }
    }

    pub fn advance(&mut self) {
        self.vel += self.acc;
        self.pos += self.vel;
        self.life -= PARTICLE_FADE;
    }

    pub fn is_finished(&self) -> bool {
        self.life < 0
    }

    // Rendered alpha tracks remaining life.
    pub fn alpha(&self) -> u8 {
        self.life.clamp(0, 255) as u8
    }
}
