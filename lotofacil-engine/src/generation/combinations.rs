use lotofacil_data::error::{LotoError, Result};
use lotofacil_data::models::{Combination, CombinationSet, validate_pool};

/// Au-delà, l'énumération ne tient plus raisonnablement en mémoire.
pub const DEFAULT_COMBINATION_LIMIT: u64 = 5_000_000;

/// C(n, k), ou `None` si le résultat dépasse u64.
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return None;
        }
    }
    Some(acc as u64)
}

/// Énumère toutes les combinaisons de `size` numéros du pool, puis les trie
/// par la concaténation texte du premier et du dernier numéro.
pub fn generate(pool: &[String], size: usize) -> Result<CombinationSet> {
    generate_bounded(pool, size, DEFAULT_COMBINATION_LIMIT)
}

/// Comme [`generate`], mais refuse les énumérations de plus de `limit` combinaisons.
pub fn generate_bounded(pool: &[String], size: usize, limit: u64) -> Result<CombinationSet> {
    validate_pool(pool)?;
    if size < 1 || size > pool.len() {
        return Err(LotoError::invalid(format!(
            "taille de combinaison {} hors limites (1-{})",
            size,
            pool.len()
        )));
    }
    if pool.len() > u16::MAX as usize {
        return Err(LotoError::invalid(format!("pool trop grand ({} numéros)", pool.len())));
    }

    let expected = binomial(pool.len() as u64, size as u64)
        .filter(|&c| c <= limit)
        .ok_or_else(|| {
            LotoError::invalid(format!(
                "C({}, {}) dépasse la limite de {} combinaisons",
                pool.len(),
                size,
                limit
            ))
        })?;
    log::debug!("Énumération de C({}, {}) = {} combinaisons", pool.len(), size, expected);

    let mut combinations = Vec::with_capacity(expected as usize);
    let mut prefix = Vec::with_capacity(size);
    extract(0, pool.len(), size, &mut prefix, &mut combinations);

    let mut set = CombinationSet {
        pool: pool.to_vec(),
        size,
        combinations,
    };
    sort_by_bounds(&mut set);
    Ok(set)
}

/// Ordre de génération : pour chaque indice i, i suivi de toutes les
/// combinaisons de taille k-1 prises après i.
fn extract(
    start: usize,
    n: usize,
    remaining: usize,
    prefix: &mut Vec<u16>,
    out: &mut Vec<Combination>,
) {
    if remaining == 1 {
        for i in start..n {
            prefix.push(i as u16);
            out.push(Combination {
                indices: prefix.as_slice().into(),
            });
            prefix.pop();
        }
        return;
    }

    for i in start..=(n - remaining) {
        prefix.push(i as u16);
        extract(i + 1, n, remaining - 1, prefix, out);
        prefix.pop();
    }
}

/// Tri stable sur la clé texte premier+dernier ("01" + "25" -> "0125").
fn sort_by_bounds(set: &mut CombinationSet) {
    let pool = &set.pool;
    set.combinations
        .sort_by(|a, b| bound_key(pool, a).cmp(bound_key(pool, b)));
}

fn bound_key<'a>(pool: &'a [String], combo: &Combination) -> impl Iterator<Item = u8> + 'a {
    let first = combo.indices.first().map_or("", |&i| pool[i as usize].as_str());
    let last = combo.indices.last().map_or("", |&i| pool[i as usize].as_str());
    first.bytes().chain(last.bytes())
}
