use std::fmt;

/// Fitness distribution of one generation, reported after replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationStats {
    pub avg: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl GenerationStats {
    pub fn from_fitness(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let avg = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in values {
            min = min.min(value);
            max = max.max(value);
        }

        Self {
            avg,
            std: variance.sqrt(),
            min,
            max,
        }
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg {:.2}, std {:.2}, min {:.2}, max {:.2}",
            self.avg, self.std, self.min, self.max
        )
    }
}
