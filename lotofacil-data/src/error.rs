use thiserror::Error;

#[derive(Debug, Error)]
pub enum LotoError {
    /// Paramètre hors limites ou incohérent (k, taille du pool, doublons, univers).
    #[error("Entrée invalide : {0}")]
    InvalidInput(String),

    /// Source des tirages absente, illisible ou mal formée.
    #[error("Format de données invalide : {0}")]
    DataFormat(String),
}

pub type Result<T> = std::result::Result<T, LotoError>;

impl LotoError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        LotoError::InvalidInput(msg.into())
    }

    pub fn data_format(msg: impl Into<String>) -> Self {
        LotoError::DataFormat(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = LotoError::invalid("k=0");
        assert_eq!(e.to_string(), "Entrée invalide : k=0");
        let e = LotoError::data_format("results manquant");
        assert_eq!(e.to_string(), "Format de données invalide : results manquant");
    }
}
