use std::collections::HashSet;

use lotofacil_data::error::{LotoError, Result};
use lotofacil_data::models::{Classification, FrequencyTable, RankedEntry};

use super::frequency::rank;

/// Taille des groupes "plus sortis", "moins sortis", "milieu" et des paquets complémentaires.
pub const GROUP_SIZE: usize = 3;
/// Position (0-based) du groupe "milieu" dans les restants.
const MIDDLE_OFFSET: usize = 3;
pub const FINAL_SET_SIZE: usize = 15;

/// Classe les numéros tirés et construit la grille finale recommandée.
///
/// Étapes :
/// - classement par fréquence décroissante (égalité : numéro croissant) ;
/// - les 3 premiers forment les plus sortis, les 3 derniers les moins sortis ;
/// - parmi les restants, rangs 4 à 6 = milieu ;
/// - fixes = plus + moins + milieu ;
/// - le reste et les numéros jamais tirés, triés par fréquence croissante puis
///   découpés par 3, fournissent chacun leur premier élément jusqu'à 15 numéros.
pub fn classify(table: &FrequencyTable, universe: &[String]) -> Result<Classification> {
    if universe.is_empty() {
        return Err(LotoError::invalid("univers de numéros vide"));
    }
    let known: HashSet<&str> = universe.iter().map(String::as_str).collect();
    if let Some((number, _)) = table.iter().find(|(n, _)| !known.contains(n)) {
        return Err(LotoError::invalid(format!(
            "le numéro '{}' n'appartient pas à l'univers",
            number
        )));
    }

    let ranked = rank(table);

    let mut seen = HashSet::new();
    let mut not_used: Vec<RankedEntry> = universe
        .iter()
        .map(String::as_str)
        .filter(|&n| !table.contains(n) && seen.insert(n))
        .map(|n| RankedEntry::new(n, 0))
        .collect();
    not_used.sort_by(|a, b| b.number.cmp(&a.number));

    let most_len = GROUP_SIZE.min(ranked.len());
    let most_selected = ranked[..most_len].to_vec();

    let remaining = &ranked[most_len..];
    let less_len = GROUP_SIZE.min(remaining.len());
    let less_selected: Vec<RankedEntry> = remaining.iter().rev().take(less_len).cloned().collect();

    let remaining = &remaining[..remaining.len() - less_len];
    let middle_start = MIDDLE_OFFSET.min(remaining.len());
    let middle_end = (MIDDLE_OFFSET + GROUP_SIZE).min(remaining.len());
    let middle_selected = remaining[middle_start..middle_end].to_vec();

    let mut fixed: Vec<RankedEntry> = most_selected
        .iter()
        .chain(&less_selected)
        .chain(&middle_selected)
        .cloned()
        .collect();
    fixed.sort_by(|a, b| a.number.cmp(&b.number));

    // Tri stable : à fréquence égale, l'ordre de concaténation est conservé.
    let mut pool: Vec<RankedEntry> = remaining[..middle_start]
        .iter()
        .chain(&remaining[middle_end..])
        .chain(&not_used)
        .cloned()
        .collect();
    pool.sort_by_key(|e| e.count);
    let complementary: Vec<Vec<RankedEntry>> =
        pool.chunks(GROUP_SIZE).map(<[RankedEntry]>::to_vec).collect();

    let mut final_set = fixed.clone();
    for chunk in &complementary {
        if final_set.len() >= FINAL_SET_SIZE {
            break;
        }
        final_set.push(chunk[0].clone());
    }
    final_set.sort_by(|a, b| a.number.cmp(&b.number));

    if final_set.len() < FINAL_SET_SIZE {
        log::warn!(
            "Grille finale incomplète : {} numéros sur {}",
            final_set.len(),
            FINAL_SET_SIZE
        );
    }
    log::debug!(
        "{} classés, {} non sortis, {} fixes, {} paquets complémentaires",
        ranked.len(),
        not_used.len(),
        fixed.len(),
        complementary.len()
    );

    Ok(Classification {
        ranked,
        not_used,
        most_selected,
        less_selected,
        middle_selected,
        fixed,
        complementary,
        final_set,
    })
}
