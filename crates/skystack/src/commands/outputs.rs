use colored::Colorize;
use skystack_core::StackComposer;

pub fn handle() -> anyhow::Result<()> {
    let config = super::load_config();
    let graph = StackComposer::new(config).compose()?;

    for (name, output) in graph.outputs() {
        match &output.description {
            Some(description) => {
                println!("{} = {}  # {}", name.cyan(), output.value, description)
            }
            None => println!("{} = {}", name.cyan(), output.value),
        }
    }

    Ok(())
}
