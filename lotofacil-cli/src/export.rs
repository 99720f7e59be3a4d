use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, Local};

use lotofacil_data::models::Ticket;

pub fn export_path(dir: &Path, name: &str, at: DateTime<Local>) -> PathBuf {
    dir.join(format!("{}__{}.csv", name, at.format("%Y-%m-%d-%H%M%S")))
}

/// Une ligne par grille : `COMB-<n>,<num1>,...,<numK>`, sans en-tête ni saut de ligne final.
pub fn render_csv(tickets: &[Ticket]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for ticket in tickets {
        writer
            .write_record(std::iter::once(ticket.label()).chain(ticket.numbers.iter().cloned()))
            .with_context(|| format!("Échec de l'écriture de la grille {}", ticket.position))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Échec de l'écriture CSV : {}", e))?;
    let mut text = String::from_utf8(bytes).context("CSV non UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

pub fn write_tickets(dir: &Path, name: &str, tickets: &[Ticket], at: DateTime<Local>) -> Result<PathBuf> {
    if tickets.is_empty() {
        bail!("Aucune grille à exporter");
    }
    let content = render_csv(tickets)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Impossible de créer le répertoire {:?}", dir))?;
    let path = export_path(dir, name, at);
    std::fs::write(&path, content)
        .with_context(|| format!("Impossible d'écrire {:?}", path))?;
    log::info!("{} grilles exportées dans {:?}", tickets.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ticket(position: usize, numbers: &[&str]) -> Ticket {
        Ticket {
            position,
            numbers: numbers.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_render_rows() {
        let tickets = vec![ticket(1, &["01", "02", "03"]), ticket(2, &["04", "05", "06"])];
        assert_eq!(
            render_csv(&tickets).unwrap(),
            "COMB-1,01,02,03\nCOMB-2,04,05,06"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_csv(&[]).unwrap(), "");
    }

    #[test]
    fn test_export_path_format() {
        let path = export_path(Path::new("exports"), "loteria", fixed_time());
        assert_eq!(path, PathBuf::from("exports/loteria__2024-03-09-140507.csv"));
    }

    #[test]
    fn test_write_tickets_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        let path = write_tickets(&target, "bolao", &[ticket(1, &["07", "08"])], fixed_time()).unwrap();
        assert!(path.starts_with(&target));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "COMB-1,07,08");
    }

    #[test]
    fn test_write_nothing_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        assert!(write_tickets(&target, "vide", &[], fixed_time()).is_err());
        assert!(!target.exists());
    }
}
