use std::path::Path;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use lotofacil_data::models::{Classification, RangeBucket, RankedEntry, SelectionGroup, Ticket};

const MAX_DISPLAYED_TICKETS: usize = 20;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn join_numbers<'a>(numbers: impl IntoIterator<Item = &'a str>) -> String {
    numbers.into_iter().collect::<Vec<_>>().join(" - ")
}

pub fn display_generation_summary(total: usize, chunk: usize, tickets: usize, path: &Path) {
    println!("Génération terminée :");
    println!("  Combinaisons possibles : {}", total);
    println!("  Taille des paquets     : {}", chunk);
    println!("  Grilles exportées      : {}", tickets);
    println!("  Fichier                : {}", path.display());
}

pub fn display_tickets(tickets: &[Ticket]) {
    if tickets.is_empty() {
        println!("Aucune grille à afficher.");
        return;
    }

    let mut table = new_table(vec!["Grille", "Numéros"]);
    for ticket in tickets.iter().take(MAX_DISPLAYED_TICKETS) {
        table.add_row(vec![
            ticket.label(),
            join_numbers(ticket.numbers.iter().map(String::as_str)),
        ]);
    }
    println!("\n{table}");

    if tickets.len() > MAX_DISPLAYED_TICKETS {
        println!("... et {} autres grilles dans le fichier.", tickets.len() - MAX_DISPLAYED_TICKETS);
    }
}

pub fn display_ranking(ranked: &[RankedEntry], draws: usize) {
    println!("\n📊 Numéros les plus sortis ({} tirages)\n", draws);

    let mut table = new_table(vec!["Rang", "Numéro", "Fréquence"]);
    for (i, entry) in ranked.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            entry.number.clone(),
            format!("{} x", entry.count),
        ]);
    }
    println!("{table}");
}

pub fn display_not_used(not_used: &[RankedEntry]) {
    println!("\n── Numéros jamais sortis ──");
    if not_used.is_empty() {
        println!("Aucun : tous les numéros sont sortis au moins une fois.");
        return;
    }
    println!("{}", join_numbers(not_used.iter().map(|e| e.number.as_str())));
}

pub fn display_ranges(buckets: &[RangeBucket]) {
    println!("\n── Tranches ──");
    let mut table = new_table(vec!["Tranche", "Total"]);
    for bucket in buckets {
        table.add_row(vec![
            format!("{} - {}", bucket.lower, bucket.upper),
            bucket.total.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_selection(classification: &Classification) {
    println!("\n── Numéros fixes ──");
    let mut table = new_table(vec!["Numéro", "Fréquence", "Groupe"]);
    for entry in &classification.fixed {
        let (label, color) = match classification.group_of(&entry.number) {
            Some(group @ SelectionGroup::Most) => (group.to_string(), Color::Green),
            Some(group @ SelectionGroup::Less) => (group.to_string(), Color::Red),
            Some(group) => (group.to_string(), Color::Yellow),
            None => ("-".to_string(), Color::White),
        };
        table.add_row(vec![
            Cell::new(&entry.number),
            Cell::new(entry.count),
            Cell::new(label).fg(color),
        ]);
    }
    println!("{table}");

    println!("\n── Complémentaires (par paquets de 3) ──");
    let mut table = new_table(vec!["Paquet", "Numéros", "Retenu"]);
    for (i, chunk) in classification.complementary.iter().enumerate() {
        let retained = chunk
            .first()
            .filter(|first| classification.final_set.contains(first))
            .map_or("-".to_string(), |first| first.number.clone());
        table.add_row(vec![
            format!("{}", i + 1),
            join_numbers(chunk.iter().map(|e| e.number.as_str())),
            retained,
        ]);
    }
    println!("{table}");
}

pub fn display_final_set(final_set: &[RankedEntry]) {
    println!("\n🎯 Grille finale ({} numéros)\n", final_set.len());
    println!("{}", join_numbers(final_set.iter().map(|e| e.number.as_str())));
}
