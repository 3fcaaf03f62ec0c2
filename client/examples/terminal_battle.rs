use std::io::{self, Write};

use anyhow::Result;
use tallgrass_client::{
    BattleClient, BattleHandle, ClientConfig, Effect, HttpResolver, HudView, Menu, MoveButton,
    PauseFlag, PokeApiSprites, Presenter, Side, Submit,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Draws the battle as plain terminal lines
struct Terminal;

impl Presenter for Terminal {
    fn open_session(&mut self) {
        println!("\n=== BATALHA ===");
    }

    fn close_session(&mut self) {
        println!("=== FIM ===\n");
    }

    fn render(&mut self, hud: &HudView) {
        for (label, side) in [("Inimigo", &hud.enemy), ("Você", &hud.player)] {
            println!(
                "{label}: {} Lv{}  HP {} ({}%){}",
                side.name,
                side.level,
                side.readout,
                side.hp.width_percent,
                side.hp.band.marker().map(|m| format!(" [{m}]")).unwrap_or_default()
            );
        }
    }

    fn show_menu(&mut self, menu: Menu) {
        match menu {
            Menu::Main => println!("[f] Lutar   [m] Mochila   [p] Pokémon   [r] Fugir"),
            Menu::Moves => println!("[1-4] Ataque   [b] Voltar   [r] Fugir"),
        }
    }

    fn show_moves(&mut self, buttons: &[MoveButton; 4]) {
        for (slot, button) in buttons.iter().enumerate() {
            println!("  {}) {}", slot + 1, button.label().replace('\n', " | "));
        }
    }

    fn show_text(&mut self, revealed: &str) {
        print!("\r> {revealed}");
        let _ = io::stdout().flush();
    }

    fn play_effect(&mut self, effect: &Effect) {
        if let Effect::Strike { target, .. } = effect {
            let who = match target {
                Side::Player => "você",
                Side::Enemy => "inimigo",
            };
            println!("\n*{who} treme*");
        } else {
            println!();
        }
    }

    fn set_sprite(&mut self, side: Side, url: &str) {
        println!("sprite {}: {url}", side.as_str());
    }

    fn set_background(&mut self, url: &str) {
        println!("arena: {url}");
    }

    fn notify(&mut self, line: &str) {
        println!("{line}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /wild <species> <id> <level> [terrain] - Start a wild battle");
    println!("  f | m | p | b | 1-4 | r                 - Battle menu");
    println!("  /close                                  - Close the battle view");
    println!("  /quit                                   - Exit");
}

fn handle_input(line: &str, handle: &BattleHandle) -> Result<bool> {
    let line = line.trim();
    let submit = match line {
        "" => return Ok(true),
        "/help" => {
            print_help();
            return Ok(true);
        }
        "/quit" | "/exit" => return Ok(false),
        "/close" => {
            handle.close()?;
            return Ok(true);
        }
        "f" => handle.fight()?,
        "m" => handle.bag()?,
        "p" => handle.team()?,
        "b" => handle.back()?,
        "r" => handle.run()?,
        "1" | "2" | "3" | "4" => {
            let slot = line.parse::<usize>()? - 1;
            handle.use_move(slot)?
        }
        _ if line.starts_with("/wild ") => {
            let parts: Vec<&str> = line.split_whitespace().skip(1).collect();
            let [species, id, level, rest @ ..] = parts.as_slice() else {
                println!("Usage: /wild <species> <id> <level> [terrain]");
                return Ok(true);
            };
            let data = serde_json::json!({
                "encounter": {
                    "species": species,
                    "pokemonId": id.parse::<u32>()?,
                    "level": level.parse::<u32>()?,
                },
                "terrain": rest.first().copied().unwrap_or("grass"),
            });
            handle.world_action("wildencounter", &data)?
        }
        _ => {
            println!("Unknown command: {line}. Type /help for commands.");
            return Ok(true);
        }
    };

    if submit == Submit::Rejected {
        println!("\n(aguarde...)");
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Tallgrass Terminal Battle");
    println!("=========================");
    print_help();

    let config = ClientConfig::from_env();
    let resolver = HttpResolver::new(config.clone())?;
    let sprites = PokeApiSprites::new(&config)?;
    let world = PauseFlag::default();

    let (mut client, handle) =
        BattleClient::new(resolver, sprites, Terminal, world, config.timings);

    tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            match handle_input(&line, &handle) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => println!("Error: {e}"),
            }
        }

        std::process::exit(0);
    });

    client.run().await;
    Ok(())
}
