use miette::*;

use laser_safe::process::process;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = std::io::read_to_string(std::io::stdin()).into_diagnostic()?;
    let result = process(&input)?;
    println!("{}", result);
    Ok(())
}
