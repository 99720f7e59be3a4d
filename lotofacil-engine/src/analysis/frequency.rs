use lotofacil_data::models::{FrequencyTable, HistoricalDraw, RankedEntry};

/// Compte chaque occurrence de chaque numéro, doublons d'un même tirage compris.
pub fn analyze(draws: &[HistoricalDraw]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for draw in draws {
        for number in &draw.numbers {
            table.increment(number);
        }
    }
    log::debug!("{} tirages, {} numéros distincts", draws.len(), table.len());
    table
}

/// Entrées par fréquence décroissante ; à égalité, numéro croissant (ordre texte).
pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = table
        .iter()
        .map(|(number, count)| RankedEntry::new(number, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.number.cmp(&b.number)));
    ranked
}
