use rand::Rng;

use lotofacil_data::error::{LotoError, Result};
use lotofacil_data::models::{CombinationSet, Ticket};

/// Source d'indices aléatoires injectée dans l'échantillonneur.
pub trait IndexSource {
    /// Renvoie un indice uniforme dans `[0, bound)`. `bound` vaut au moins 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Taille nominale d'un paquet : ceil(total / tickets).
pub fn chunk_size(total: usize, tickets: usize) -> usize {
    total.div_ceil(tickets.max(1)).max(1)
}

/// Découpe l'ensemble trié en paquets consécutifs et tire une combinaison par paquet.
///
/// Le dernier paquet peut être plus court que la taille nominale ; l'indice
/// y est alors borné par sa longueur réelle.
pub fn sample<S: IndexSource + ?Sized>(
    set: &CombinationSet,
    tickets: usize,
    source: &mut S,
) -> Result<Vec<Ticket>> {
    if tickets < 1 {
        return Err(LotoError::invalid("le nombre de grilles doit être au moins 1"));
    }
    if set.is_empty() {
        return Ok(Vec::new());
    }

    let size = chunk_size(set.len(), tickets);
    log::debug!(
        "{} combinaisons, {} grilles demandées, paquets de {}",
        set.len(),
        tickets,
        size
    );

    let sampled: Vec<Ticket> = set
        .combinations
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| {
            if chunk.len() < size {
                log::debug!("Dernier paquet réduit : {} au lieu de {}", chunk.len(), size);
            }
            let index = source.next_index(chunk.len()).min(chunk.len() - 1);
            Ticket {
                position: i + 1,
                numbers: set.to_numbers(&chunk[index]),
            }
        })
        .collect();

    if sampled.len() < tickets {
        log::warn!(
            "Seulement {} grilles possibles sur {} demandées",
            sampled.len(),
            tickets
        );
    }
    Ok(sampled)
}
