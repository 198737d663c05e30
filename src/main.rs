use clap::{Parser, Subcommand};
use dotenv::dotenv;

use certflow_rs::certflow::error::CertflowError;
use certflow_rs::certflow::workflow::context::VariableContext;
use certflow_rs::certflow::workflow::expr::{decode_str, evaluate, RawValue, ValueKind};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a rule against a variable context
    Eval {
        /// Path to the rule JSON file
        #[arg(short, long)]
        rule: String,

        /// Path to the context JSON file (node id -> variable -> value)
        #[arg(short, long)]
        context: String,
    },
    /// Validate that a rule file decodes
    Check {
        /// Path to the rule JSON file
        #[arg(short, long)]
        rule: String,
    },
}

fn main() -> Result<(), CertflowError> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { rule, context } => {
            let tree = decode_str(&std::fs::read_to_string(&rule)?)?;
            let context: VariableContext =
                serde_json::from_str(&std::fs::read_to_string(&context)?)?;

            let result = evaluate(&tree, &context)?;
            log::debug!("rule {} evaluated to {:?}", rule, result);

            match result.kind {
                ValueKind::Boolean => {
                    let satisfied = result.as_boolean()?;
                    println!("{}", satisfied);
                    if !satisfied {
                        std::process::exit(1);
                    }
                }
                kind => {
                    // Rules normally produce booleans; report other kinds as-is
                    let text = match &result.value {
                        RawValue::Text(s) => s.clone(),
                        RawValue::Bool(b) => b.to_string(),
                    };
                    println!("{}: {}", kind, text);
                }
            }
        }
        Commands::Check { rule } => {
            decode_str(&std::fs::read_to_string(&rule)?)?;
            log::info!("rule {} decodes cleanly", rule);
            println!("ok");
        }
    }

    Ok(())
}
