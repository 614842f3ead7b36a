/// Preview: interactive shell for browsing generated rosters and caravans.
///
/// Usage: preview [--config <file.ron>] [--seed <text>]
///
/// Commands:
///   seed [text]       show or set the seed
///   npcs <n>          set the NPC count (1-50)
///   items <n>         set items per NPC (0-4)
///   hosted <n>        set the caravan hosted NPC count (0-50)
///   resources <n>     set the caravan resource total (0-200)
///   reroll            append a random token to the seed
///   show              print NPC cards and the caravan panel
///   json              print the export document
///   help              list commands
///   quit              exit

use econom_generator::core::pipeline::{EcoNomGenerator, GenerationConfig};
use econom_generator::schema::caravan::Caravan;
use econom_generator::schema::item::{Item, ItemBonus};
use econom_generator::schema::npc::Npc;
use std::io::{self, BufRead, Write};
use std::path::Path;
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

    let mut config = GenerationConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                match GenerationConfig::load_from_ron(Path::new(&args[i])) {
                    Ok(loaded) => config = loaded,
                    Err(e) => {
                        eprintln!("Error loading {}: {}", args[i], e);
                        std::process::exit(1);
                    }
                }
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                config.seed = args[i].clone();
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut generator = build_generator(&config);
    println!("Seed: {}", generator.config().seed);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "seed" => {
                if rest.is_empty() {
                    println!("Current seed: {}", generator.config().seed);
                } else {
                    // Seeds may contain spaces; everything after the command counts.
                    config.seed = rest.to_string();
                    generator = build_generator(&config);
                    println!("Seed set to {}", generator.config().seed);
                }
            }
            "npcs" | "items" | "hosted" | "resources" => {
                let n: u32 = match rest.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        println!("Usage: {} <n>", cmd);
                        continue;
                    }
                };
                match cmd.as_str() {
                    "npcs" => config.npc_count = n,
                    "items" => config.items_per_npc = n,
                    "hosted" => config.hosted_npc_count = n,
                    _ => config.total_resources = n,
                }
                generator = build_generator(&config);
                config = generator.config().clone();
                print_knobs(&config);
            }
            "reroll" => {
                generator = generator.rerolled(&mut rand::thread_rng());
                config = generator.config().clone();
                println!("Seed set to {}", config.seed);
            }
            "show" => {
                let generation = generator.generate();
                for npc in &generation.npcs {
                    print_npc(npc);
                }
                print_caravan(&generation.caravan);
            }
            "json" => match generator.generate().to_json_pretty() {
                Ok(json) => println!("{}", json),
                Err(e) => println!("ERROR: {}", e),
            },
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn build_generator(config: &GenerationConfig) -> EcoNomGenerator {
    // Only config files can fail to load; a direct config always builds.
    match EcoNomGenerator::builder().with_config(config.clone()).build() {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_knobs(config: &GenerationConfig) {
    println!(
        "NPCs: {}  items: {}  hosted: {}  resources: {}",
        config.npc_count, config.items_per_npc, config.hosted_npc_count, config.total_resources
    );
}

fn print_npc(npc: &Npc) {
    println!("\n=== {} [{}] ===", npc.name, npc.id);
    println!("  {}", npc.title);
    println!("  Clan: {} ({})", npc.clan, npc.clan_family());
    println!("  Terrain: {}", npc.terrain);
    let skills: Vec<String> = npc.skills.iter().map(|s| s.to_string()).collect();
    println!("  Skills: {}", skills.join(", "));
    println!(
        "  Armor: {}  Stock: {}  Travel: {}",
        npc.armor, npc.stock, npc.travel
    );
    if npc.inventory.is_empty() {
        println!("  Inventory: (empty)");
    } else {
        println!("  Inventory:");
        for item in &npc.inventory {
            println!("    - {}", describe_item(item));
        }
    }
}

fn describe_item(item: &Item) -> String {
    let bonus = match &item.bonus {
        ItemBonus::Skills(skills) => {
            let names: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
            names.join(" + ")
        }
        ItemBonus::Armor(points) => format!("armure +{}", points),
        ItemBonus::Stock(stock) => format!("stock +{}", stock),
        ItemBonus::Travel(tokens) => format!("voyage +{}", tokens),
    };
    format!(
        "{} ({}, {}) {}",
        item.name,
        item.family,
        item.grade.label(),
        bonus
    )
}

fn print_caravan(caravan: &Caravan) {
    println!("\n=== Caravane: {} [{}] ===", caravan.name, caravan.id);
    println!(
        "  Hosted NPCs: {}  Resources: {}",
        caravan.hosted_npc_count, caravan.total_resources
    );
    println!("  Fauna: {}", caravan.fauna.join(", "));
    println!("  Flora: {}", caravan.flora.join(", "));
    println!();
}

fn print_usage() {
    eprintln!("Usage: preview [--config <file.ron>] [--seed <text>]");
}

fn print_help() {
    println!("Commands:");
    println!("  seed [text]      Show or set the seed");
    println!("  npcs <n>         Set the NPC count (1-50)");
    println!("  items <n>        Set items per NPC (0-4)");
    println!("  hosted <n>       Set the caravan hosted NPC count (0-50)");
    println!("  resources <n>    Set the caravan resource total (0-200)");
    println!("  reroll           Append a random token to the seed");
    println!("  show             Print NPC cards and the caravan panel");
    println!("  json             Print the export document");
    println!("  help             This message");
    println!("  quit             Exit");
}
