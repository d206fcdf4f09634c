use anyhow::{anyhow, Context, Result};
use log::debug;

use example_domains::{config, Operation, User};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = run(&args)?;
    println!("{}", output);

    Ok(())
}

fn run(args: &[String]) -> Result<String> {
    let Some((command, rest)) = args.split_first() else {
        return Err(anyhow!("Missing command\n{}", config::USAGE));
    };

    match command.as_str() {
        "calc" => handle_calc(rest),
        "profile" => handle_profile(rest),
        other => Err(anyhow!("Unknown command: {}\n{}", other, config::USAGE)),
    }
}

fn handle_calc(args: &[String]) -> Result<String> {
    let [op, a, b] = args else {
        return Err(anyhow!("calc expects <op> <a> <b>\n{}", config::USAGE));
    };

    let op: Operation = op.parse()?;
    let a = parse_operand(a)?;
    let b = parse_operand(b)?;
    debug!("Applying {} to {} and {}", op, a, b);

    Ok(op.apply(a, b).to_string())
}

fn parse_operand(value: &str) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("Invalid operand: {}", value))
}

fn handle_profile(args: &[String]) -> Result<String> {
    let Some((json, assignments)) = args.split_first() else {
        return Err(anyhow!("profile expects <json>\n{}", config::USAGE));
    };

    let mut user = User::from_json(json)?;

    for assignment in assignments {
        let Some((field, value)) = assignment.split_once('=') else {
            return Err(anyhow!("Expected field=value, got: {}", assignment));
        };

        match field {
            "name" => user.set_name(value),
            "age" => user.set_age(
                value
                    .parse()
                    .with_context(|| format!("Invalid age: {}", value))?,
            ),
            "email" => user.set_email(value),
            "username" => return Err(anyhow!("username cannot be changed")),
            other => return Err(anyhow!("Unknown field: {}", other)),
        }
    }

    user.profile().to_json()
}
