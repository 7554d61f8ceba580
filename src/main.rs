mod kernel;
mod shell;

use kernel::System;
use shell::StdinConsole;

fn main() {
    env_logger::init();

    let config = shell::sysgen();
    let mut system = match System::new(config) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("Invalid system configuration: {}", err);
            std::process::exit(1);
        }
    };

    let mut console = StdinConsole;
    shell::run(&mut system, &mut console);
    println!("Shutting down.");
}
