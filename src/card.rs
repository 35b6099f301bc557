//! Terminal card rendering.
//!
//! Combines the Pokémon and species records into one display model and
//! renders it: header with id, genus, and types, base stats as scaled bars,
//! the Pokédex flavor text, abilities, and physical data. The model doubles
//! as the `show` command's JSON payload.

use colored::{Color, Colorize};
use serde::Serialize;

use crate::api::{Pokemon, Species};

/// Width of a fully filled stat bar, in cells
const STAT_BAR_WIDTH: usize = 30;

/// Highest base stat the catalog uses; bars are scaled against it
const STAT_MAX: u32 = 255;

/// Everything the card shows.
#[derive(Debug, Serialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub genus: String,
    pub types: Vec<String>,
    pub stats: Vec<StatLine>,
    pub flavor_text: String,
    pub abilities: Vec<AbilityLine>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub base_experience: Option<u32>,
    pub species: String,
}

#[derive(Debug, Serialize)]
pub struct StatLine {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Serialize)]
pub struct AbilityLine {
    pub name: String,
    pub hidden: bool,
}

impl Card {
    /// Combine the two catalog records into the display model.
    pub fn assemble(pokemon: Pokemon, species: Species) -> Self {
        let genus = species
            .genera
            .iter()
            .find(|g| g.language.name == "en")
            .map(|g| g.genus.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let flavor_text = species
            .flavor_text_entries
            .iter()
            .find(|e| e.language.name == "en")
            .map(|e| clean_flavor(&e.flavor_text))
            .unwrap_or_else(|| "No description available.".to_string());

        Self {
            id: pokemon.id,
            name: pokemon.name,
            genus,
            types: pokemon.types.into_iter().map(|t| t.kind.name).collect(),
            stats: pokemon
                .stats
                .into_iter()
                .map(|s| StatLine {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            flavor_text,
            abilities: pokemon
                .abilities
                .into_iter()
                .map(|a| AbilityLine {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                })
                .collect(),
            height_m: f64::from(pokemon.height) / 10.0,
            weight_kg: f64::from(pokemon.weight) / 10.0,
            base_experience: pokemon.base_experience,
            species: species.name,
        }
    }
}

/// Render the card to stdout.
pub fn print_human(card: &Card) {
    println!();
    println!(
        "{}  {}",
        display_name(&card.name).bold(),
        format_id(card.id).dimmed()
    );
    println!("{}", card.genus);

    let chips: Vec<String> = card
        .types
        .iter()
        .map(|t| t.color(type_color(t)).bold().to_string())
        .collect();
    println!("{}", chips.join("  "));

    println!();
    println!("BASE STATS:");
    for stat in &card.stats {
        let filled = bar_fill(stat.value);
        let bar = format!(
            "{}{}",
            "█".repeat(filled).color(stat_color(&stat.name)),
            "░".repeat(STAT_BAR_WIDTH - filled).dimmed()
        );
        println!(
            "  {:16} {} {:>4}",
            stat.name.replace('-', " "),
            bar,
            stat.value
        );
    }

    println!();
    println!("POKÉDEX ENTRY:");
    for line in wrap_text(&card.flavor_text, 74) {
        println!("  {}", line);
    }

    println!();
    println!("ABILITIES:");
    for ability in &card.abilities {
        let label = ability.name.replace('-', " ");
        if ability.hidden {
            println!("  {} {}", label, "(hidden)".dimmed());
        } else {
            println!("  {}", label);
        }
    }

    println!();
    println!("PHYSICAL:");
    println!("  Height:   {} m", card.height_m);
    println!("  Weight:   {} kg", card.weight_kg);
    match card.base_experience {
        Some(xp) => println!("  Base XP:  {}", xp),
        None => println!("  Base XP:  -"),
    }
    println!("  Species:  {}", card.species);
    println!();
}

/// `#NNN`, zero-padded to three digits; longer ids print in full.
fn format_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// Cells of a stat bar that are filled for `value`, rounded to nearest.
fn bar_fill(value: u32) -> usize {
    let clamped = value.min(STAT_MAX);
    ((clamped as usize * STAT_BAR_WIDTH) + STAT_MAX as usize / 2) / STAT_MAX as usize
}

/// Catalog names are lowercase and hyphenated; capitalize each segment
/// for the header ("mr-mime" -> "Mr-Mime").
fn display_name(name: &str) -> String {
    name.split('-')
        .map(|seg| {
            let mut chars = seg.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Flavor text comes with embedded newlines and form feeds from the games'
/// screen layout; flatten them to spaces.
fn clean_flavor(raw: &str) -> String {
    raw.replace(['\n', '\u{c}'], " ")
}

/// Greedy word wrap; words longer than `width` get their own line.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn type_color(name: &str) -> Color {
    match name {
        "normal" => Color::White,
        "fire" => Color::Red,
        "water" => Color::Blue,
        "electric" => Color::Yellow,
        "grass" => Color::Green,
        "ice" => Color::Cyan,
        "fighting" => Color::BrightRed,
        "poison" => Color::Magenta,
        "ground" => Color::BrightYellow,
        "flying" => Color::BrightBlue,
        "psychic" => Color::BrightMagenta,
        "bug" => Color::BrightGreen,
        "rock" => Color::Yellow,
        "ghost" => Color::Blue,
        "dragon" => Color::BrightBlue,
        "dark" => Color::BrightBlack,
        "steel" => Color::BrightWhite,
        "fairy" => Color::Magenta,
        _ => Color::White,
    }
}

fn stat_color(name: &str) -> Color {
    match name {
        "hp" => Color::Red,
        "attack" => Color::Yellow,
        "defense" => Color::Blue,
        "special-attack" => Color::Magenta,
        "special-defense" => Color::Green,
        "speed" => Color::BrightMagenta,
        _ => Color::White,
    }
}
