use anyhow::{bail, Context, Result};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The pop cue, decoded once at startup and kept in memory. If `load`
/// fails the app carries `None` instead and pops stay silent for the
/// rest of the run.
pub struct PopSound {
    // Dropping the stream kills playback, so it rides along unused.
    _stream: OutputStream,
    sink: Sink,
    cue: Buffered<Decoder<BufReader<File>>>,
}

impl PopSound {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let (stream, handle) = OutputStream::try_default().context("open audio output")?;
        let sink = Sink::try_new(&handle).context("create audio sink")?;
        let cue = Decoder::new(BufReader::new(file))
            .with_context(|| format!("decode {}", path.display()))?
            .buffered();
        // Pull the whole cue through once: fills the shared buffer and
        // catches files that decode to nothing.
        if cue.clone().count() == 0 {
            bail!("{} decoded to zero samples", path.display());
        }
        Ok(Self {
            _stream: stream,
            sink,
            cue,
        })
    }

    /// Fire the cue, but only when the previous one has finished. Each
    /// append starts from a fresh playhead, so rapid pops retrigger the
    /// moment the sink goes idle instead of stacking or cutting off.
    pub fn play(&self) {
        if self.sink.empty() {
            self.sink.append(self.cue.clone());
        }
    }
}
