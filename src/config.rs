use std::process;

/// Host-side knobs. None of these change the simulation rules; they pick
/// the frame budget, the RNG seed, the pop-cue file, and the render flavor.
#[derive(Clone, Debug)]
pub struct Settings {
    pub fps: u32,
    /// 0 means "derive from the clock"; anything else replays exactly.
    pub seed: u64,
    pub sound: String,
    pub muted: bool,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: 60,
            seed: 0,
            sound: "assets/pop.wav".to_string(),
            muted: false,
            color: true,
        }
    }
}

pub fn parse_args() -> Settings {
    parse_from(std::env::args().skip(1))
}

fn parse_from<I: Iterator<Item = String>>(mut it: I) -> Settings {
    let mut out = Settings::default();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--fps" => {
                if let Some(v) = it.next() {
                    out.fps = v.parse().unwrap_or(out.fps);
                }
            }
            "--seed" => {
                if let Some(v) = it.next() {
                    out.seed = v.parse().unwrap_or(out.seed);
                }
            }
            "--sound" => {
                if let Some(v) = it.next() {
                    out.sound = v;
                }
            }
            "--muted" => out.muted = true,
            "--no-color" => out.color = false,
            "--help" | "-h" => {
                println!(
                    "bubblepop\n\
                     \n\
                     USAGE:\n\
                     \tbubblepop [--fps 15..240] [--seed N] [--sound path/to/cue.wav]\n\
                     \t          [--muted] [--no-color]\n\
                     \n\
                     PLAY:\n\
                     \tclick a bubble to pop it: pink pays +1, any other color costs 1\n\
                     \tthe first click also switches the pop sound on\n\
                     \n\
                     KEYS:\n\
                     \tQ/Esc quit | P pause | R restart | H or ? help\n"
                );
                process::exit(0);
            }
            _ => {}
        }
    }
    out.fps = out.fps.clamp(15, 240);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_hold_without_flags() {
        let s = parse(&[]);
        assert_eq!(s.fps, 60);
        assert_eq!(s.seed, 0);
        assert_eq!(s.sound, "assets/pop.wav");
        assert!(!s.muted);
        assert!(s.color);
    }

    #[test]
    fn flags_override_defaults() {
        let s = parse(&[
            "--fps", "30", "--seed", "42", "--sound", "pop2.wav", "--muted", "--no-color",
        ]);
        assert_eq!(s.fps, 30);
        assert_eq!(s.seed, 42);
        assert_eq!(s.sound, "pop2.wav");
        assert!(s.muted);
        assert!(!s.color);
    }

    #[test]
    fn bad_values_fall_back_and_fps_is_clamped() {
        let s = parse(&["--fps", "nope", "--seed", "x"]);
        assert_eq!(s.fps, 60);
        assert_eq!(s.seed, 0);
        let s = parse(&["--fps", "1000"]);
        assert_eq!(s.fps, 240);
        let s = parse(&["--fps", "1"]);
        assert_eq!(s.fps, 15);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let s = parse(&["--wat", "--fps", "90"]);
        assert_eq!(s.fps, 90);
    }
}
