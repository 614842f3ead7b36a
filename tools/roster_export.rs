/// Roster Export: one-shot generation of a roster and its caravan as JSON.
///
/// Usage: roster_export [--config <file.ron>] [--seed <text>] [--npcs <n>]
///                      [--items <n>] [--hosted <n>] [--resources <n>]
///                      [--reroll] [--output <file.json>]
///
/// Flags override values from the config file. Without `--output` the
/// document goes to stdout. Logs go to stderr (`RUST_LOG=debug`).

use econom_generator::core::pipeline::{EcoNomGenerator, EcoNomGeneratorBuilder};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut builder = EcoNomGenerator::builder();
    let mut output = None;
    let mut reroll = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                builder = builder.config_file(&args[i]);
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                builder = builder.seed(&args[i]);
            }
            "--npcs" if i + 1 < args.len() => {
                i += 1;
                builder = builder.npc_count(parse_count("--npcs", &args[i]));
            }
            "--items" if i + 1 < args.len() => {
                i += 1;
                builder = builder.items_per_npc(parse_count("--items", &args[i]));
            }
            "--hosted" if i + 1 < args.len() => {
                i += 1;
                builder = builder.hosted_npc_count(parse_count("--hosted", &args[i]));
            }
            "--resources" if i + 1 < args.len() => {
                i += 1;
                builder = builder.total_resources(parse_count("--resources", &args[i]));
            }
            "--output" | "-o" if i + 1 < args.len() => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--reroll" => reroll = true,
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let generator = build(builder);
    let generator = if reroll {
        generator.rerolled(&mut rand::thread_rng())
    } else {
        generator
    };

    let config = generator.config();
    eprintln!(
        "Seed: {} ({} NPCs x {} items, caravan {} hosted / {} resources)",
        config.seed,
        config.npc_count,
        config.items_per_npc,
        config.hosted_npc_count,
        config.total_resources
    );

    let generation = generator.generate();
    match output {
        Some(path) => {
            if let Err(e) = generation.save_json(Path::new(&path)) {
                eprintln!("Error writing {}: {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote {}", path);
        }
        None => match generation.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing export: {}", e);
                process::exit(1);
            }
        },
    }
}

fn build(builder: EcoNomGeneratorBuilder) -> EcoNomGenerator {
    match builder.build() {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    }
}

fn parse_count(flag: &str, value: &str) -> u32 {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("{} expects a non-negative integer, got '{}'", flag, value);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: roster_export [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file.ron>  Load knobs from a RON config file");
    eprintln!("  --seed <text>        Generation seed (default EcoNom-v1)");
    eprintln!("  --npcs <n>           Number of NPCs, 1-50 (default 6)");
    eprintln!("  --items <n>          Items per NPC, 0-4 (default 2)");
    eprintln!("  --hosted <n>         Caravan hosted NPC count, 0-50 (default 6)");
    eprintln!("  --resources <n>      Caravan resource total, 0-200 (default 30)");
    eprintln!("  --reroll             Append a random token to the seed");
    eprintln!("  --output <file>      Write JSON to a file instead of stdout");
}
