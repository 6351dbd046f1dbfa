use padcompat_core::{CompatibilityRecord, CompatibilitySource, SupportLevel};

/// Counts of stored records per support level and per source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityStats {
    counts: [usize; 5],
    sources: [usize; 5],
    pub total: usize,
}

impl CompatibilityStats {
    pub fn from_records(records: &[CompatibilityRecord]) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add(record.support_level);
            stats.sources[source_slot(record.source)] += 1;
        }
        stats
    }

    pub fn add(&mut self, level: SupportLevel) {
        self.counts[slot(level)] += 1;
        self.total += 1;
    }

    pub fn count(&self, level: SupportLevel) -> usize {
        self.counts[slot(level)]
    }

    /// Records written by `source`. Only filled by [`Self::from_records`].
    pub fn count_source(&self, source: CompatibilitySource) -> usize {
        self.sources[source_slot(source)]
    }

    /// Records at `Full` or `Partial`.
    pub fn controller_ready(&self) -> usize {
        SupportLevel::all()
            .iter()
            .filter(|l| l.is_controller_ready())
            .map(|l| self.count(*l))
            .sum()
    }

    /// Share of records at `level`, 0-100. Zero for an empty store.
    pub fn percent(&self, level: SupportLevel) -> f64 {
        percent_of(self.count(level), self.total)
    }

    pub fn ready_percent(&self) -> f64 {
        percent_of(self.controller_ready(), self.total)
    }
}

fn slot(level: SupportLevel) -> usize {
    match level {
        SupportLevel::Unknown => 0,
        SupportLevel::None => 1,
        SupportLevel::Partial => 2,
        SupportLevel::Full => 3,
        SupportLevel::Community => 4,
    }
}

fn source_slot(source: CompatibilitySource) -> usize {
    match source {
        CompatibilitySource::Unknown => 0,
        CompatibilitySource::Official => 1,
        CompatibilitySource::Community => 2,
        CompatibilitySource::User => 3,
        CompatibilitySource::AutoDetected => 4,
    }
}

fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
