use anyhow::Result;

fn main() -> Result<()> {
    bubblepop::app::run()
}
