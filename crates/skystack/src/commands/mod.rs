pub mod outputs;
pub mod synth;

use colored::Colorize;
use skystack_config::StackConfig;

/// Load the stack configuration or exit with a configuration error.
///
/// Missing inputs fail the whole run; there is no partial stack.
pub fn load_config() -> StackConfig {
    match StackConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", "✗ configuration error".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
