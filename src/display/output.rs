use crate::analysis::champion::Character;
use crate::analysis::recommender::Recommendation;
use crate::analysis::team_stats::TeamCompositionStats;
use crate::knowledge::KnowledgeBase;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct PickRow {
    rank: String,
    champion: String,
    roles: String,
    damage: String,
    score: String,
    reasons: String,
}

#[derive(Tabled)]
struct ChampionRow {
    id: String,
    name: String,
    roles: String,
    attack: String,
    magic: String,
    defense: String,
}

fn roles_of(champion: &Character) -> String {
    champion
        .tags
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn names_of(roster: &[Character]) -> String {
    if roster.is_empty() {
        return "-".to_string();
    }
    roster.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
}

pub fn display_draft(ally: &[Character], ally_limit: usize, enemy: &[Character], enemy_limit: usize) {
    println!("\n{}", "⚔️  Draft".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!("{} {} / {}  {}", "Aliados:".blue().bold(), ally.len(), ally_limit, names_of(ally));
    println!("{} {} / {}  {}", "Enemigos:".red().bold(), enemy.len(), enemy_limit, names_of(enemy));
}

pub fn display_recommendations(recommendations: &[Recommendation], knowledge: &KnowledgeBase) {
    println!("\n{}", "✨ Recomendaciones (Sinergias & Counters)".bold().yellow());
    println!("{}\n", "=".repeat(60).yellow());

    if recommendations.is_empty() {
        println!(
            "{}",
            "No recommendations (empty catalog, full ally roster, or no rule fired)".yellow()
        );
        return;
    }

    let rows: Vec<PickRow> = recommendations
        .iter()
        .enumerate()
        .map(|(idx, rec)| PickRow {
            rank: format!("#{}", idx + 1),
            champion: rec.character.name.clone(),
            roles: roles_of(&rec.character),
            damage: knowledge
                .damage_type(&rec.character.id)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            score: rec.score.to_string(),
            reasons: rec.reasons.join("\n"),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    if let Some(top) = recommendations.first() {
        println!("{} {} ({} pts)", "Top pick:".bold().green(), top.character.name.bold(), top.score);
        for reason in &top.reasons {
            println!("  • {}", reason);
        }
        println!();
    }
}

const BAR_WIDTH: usize = 30;

pub fn display_team_stats(title: &str, stats: &TeamCompositionStats) {
    println!("\n{}", format!("📊 {}", title).bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    for (label, value) in stats.axes() {
        let filled = ((value / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)));
        let colored_bar = if value >= 66.0 {
            bar.green()
        } else if value >= 33.0 {
            bar.yellow()
        } else {
            bar.red()
        };
        println!("  {:<14} {} {:>5.1}", label, colored_bar, value);
    }
    println!();
}

pub fn display_search_results(results: &[&Character]) {
    if results.is_empty() {
        println!("{}", "No champions match".yellow());
        return;
    }

    let rows: Vec<ChampionRow> = results
        .iter()
        .map(|c| ChampionRow {
            id: c.id.clone(),
            name: c.name.clone(),
            roles: roles_of(c),
            attack: format!("{}", c.attributes.attack),
            magic: format!("{}", c.attributes.magic),
            defense: format!("{}", c.attributes.defense),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{} champions", results.len());
}

fn relation_line(label: &str, ids: &[&str]) {
    let value = if ids.is_empty() { "-".to_string() } else { ids.join(", ") };
    println!("  {:<22} {}", label.bold(), value);
}

pub fn display_champion_detail(champion: &Character, knowledge: &KnowledgeBase, image_url: &str) {
    println!("\n{} {}", champion.name.bold().cyan(), champion.title.italic());
    println!("{}", "=".repeat(60).cyan());
    println!("  {:<22} {}", "Id:".bold(), champion.id);
    println!("  {:<22} {}", "Roles:".bold(), roles_of(champion));
    println!(
        "  {:<22} attack {} / magic {} / defense {} / difficulty {}",
        "Attributes:".bold(),
        champion.attributes.attack,
        champion.attributes.magic,
        champion.attributes.defense,
        champion.attributes.difficulty
    );
    if let Some(kind) = knowledge.damage_type(&champion.id) {
        println!("  {:<22} {}", "Damage type:".bold(), kind);
    }
    println!("  {:<22} {}", "Image:".bold(), image_url);

    let pairs_with: Vec<&str> = knowledge.synergies_of(&champion.id).iter().map(String::as_str).collect();
    let beaten_by: Vec<&str> = knowledge.counters_of(&champion.id).iter().map(String::as_str).collect();

    println!();
    relation_line("Pairs well with:", &pairs_with);
    relation_line("Listed as partner by:", &knowledge.synergy_partners_of(&champion.id));
    relation_line("Countered by:", &beaten_by);
    relation_line("Counters:", &knowledge.threats_countered_by(&champion.id));
    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}
