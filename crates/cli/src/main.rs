use anyhow::Result;
use argmap::{Arity, Error, OptSpec, parse, render};
use tracing_subscriber::{EnvFilter, fmt};

/// Demonstration option set: a bare flag, an option with a required value
/// and an option with an optional (attached) value.
fn declarations() -> Vec<OptSpec> {
    vec![
        OptSpec::new("flag", 'm', Arity::None).help("Flag with no argument"),
        OptSpec::new("input-file", 'f', Arity::Required)
            .required()
            .help("Flag with a required argument"),
        OptSpec::new("optimize", 'o', Arity::Optional)
            .help("Flag with an optional argument")
            .default_value("2"),
    ]
}

fn main() -> Result<()> {
    init_tracing();

    let opts = declarations();
    let matches = parse(&opts, std::env::args())?;
    tracing::debug!(options = matches.len(), "parsed command line");

    if matches.is_present("help") {
        print!(
            "argmap-demo shows how to drive the argmap library. Possible options:\n\n{}",
            render(&opts)
        );
        return Ok(());
    }

    if matches.is_present("flag") {
        println!("flag: set");
    }

    if let Some(input) = matches.get("input-file") {
        if input.is_present() {
            println!("input-file: {}", input.as_str()?);
        }
    }

    if let Some(optimize) = matches.get("optimize") {
        if optimize.is_present() {
            // A bare `-o` carries no value; recover instead of bailing.
            match optimize.value::<u32>() {
                Ok(level) => println!("optimize: level {level}"),
                Err(Error::NoValue { .. }) => println!("optimize: default level"),
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
