use crate::model::{
    Bubble, Particle, BONUS_COLOR, BUBBLE_COUNT, INITIAL_DEPTH, RESPAWN_DEPTH,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// What a click did, so the host can react (sound, etc.) without the game
/// knowing anything about audio.
#[derive(Clone, Copy, Debug)]
pub struct ClickOutcome {
    pub audio_unlocked: bool,
    pub popped: bool,
    pub bonus: bool,
}

/// The whole game: two entity lists, a score, one boolean, and the RNG that
/// feeds them. Holds no handle to the terminal or the speaker, so a `Game`
/// can be constructed and driven headlessly with a fixed seed.
pub struct Game {
    width: f32,
    height: f32,
    bubbles: Vec<Bubble>,
    particles: Vec<Particle>,
    score: i32,
    audio_enabled: bool,
    rng: StdRng,
    noise_seed: u32,
}

impl Game {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise_seed = rng.gen();

        let mut bubbles = Vec::with_capacity(BUBBLE_COUNT);
        for _ in 0..BUBBLE_COUNT {
            let x = rng.gen_range(0.0..width);
            let y = height + rng.gen_range(0.0..INITIAL_DEPTH);
            bubbles.push(Bubble::new(&mut rng, x, y));
        }

        Self {
            width,
            height,
            bubbles,
            particles: Vec::new(),
            score: 0,
            audio_enabled: false,
            rng,
            noise_seed,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// New bounds only affect where future bubbles spawn; nothing moves.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn replacement_bubble(&mut self) -> Bubble {
        let x = self.rng.gen_range(0.0..self.width);
        let y = self.height + self.rng.gen_range(0.0..RESPAWN_DEPTH);
        Bubble::new(&mut self.rng, x, y)
    }

    /// One simulation step: every bubble rises, off-screen ones are swapped
    /// for fresh spawns below the lower edge, particles integrate and fade.
    pub fn tick(&mut self) {
        let seed = self.noise_seed;

        // Back-to-front so removal never skips a neighbor; replacements land
        // at the end and sit out the tick that spawned them.
        for i in (0..self.bubbles.len()).rev() {
            self.bubbles[i].advance(seed);
            if self.bubbles[i].is_offscreen() {
                self.bubbles.remove(i);
                let fresh = self.replacement_bubble();
                self.bubbles.push(fresh);
            }
        }

        for p in &mut self.particles {
            p.advance();
        }
        self.particles.retain(|p| !p.is_finished());
    }

    /// Resolve a click at a logical-pixel position. At most one bubble pops,
    /// and among overlapping hits the most recently spawned one wins.
    pub fn handle_click(&mut self, px: f32, py: f32) -> ClickOutcome {
        // First interaction anywhere unlocks audio; the flag never reverts.
        let audio_unlocked = !self.audio_enabled;
        self.audio_enabled = true;

        let mut popped = false;
        let mut bonus = false;

        // Newest first, and only the first hit is consumed.
        for i in (0..self.bubbles.len()).rev() {
            if self.bubbles[i].is_clicked(px, py) {
                let b = self.bubbles.remove(i);
                bonus = b.color == BONUS_COLOR;
                self.score += if bonus { 1 } else { -1 };
                let count = b.burst_count();
                for _ in 0..count {
                    let p = Particle::new(&mut self.rng, b.x, b.y);
                    self.particles.push(p);
                }
                let fresh = self.replacement_bubble();
                self.bubbles.push(fresh);
                popped = true;
                break;
            }
        }

        ClickOutcome {
            audio_unlocked,
            popped,
            bonus,
        }
    }
}
