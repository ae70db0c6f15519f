use stopwatch::Session;

use anyhow::Result;

use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let mut session = Session::new();
    session.run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())?;

    Ok(())
}
