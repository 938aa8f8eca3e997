use std::io::{self, BufRead};

use partstock_console::{Console, ConsoleConfig, Flow};
use partstock_observability::ObservabilityConfig;

fn main() -> anyhow::Result<()> {
    partstock_observability::init(&ObservabilityConfig::from_env());

    let config = ConsoleConfig::from_env();
    if let Some(rejected) = &config.rejected {
        tracing::warn!(setting = %rejected, "ignored invalid console setting");
    }
    tracing::info!(seeded = config.seed, "inventory loaded");

    let mut console = Console::new(config.build_inventory(), io::stdout().lock());
    let mut lines = io::stdin().lock().lines();

    loop {
        console.prompt()?;
        let Some(line) = lines.next() else { break };
        if console.handle_line(&line?)? == Flow::Quit {
            break;
        }
    }

    tracing::info!("session ended");
    Ok(())
}
