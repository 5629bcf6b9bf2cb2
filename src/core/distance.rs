use crate::domain::model::RouteRecord;

/// Bidirectional distance lookup over a fixed route table. The table is
/// borrowed, never mutated; duplicate pairs are allowed and the first match
/// in table order wins.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable<'a> {
    routes: &'a [RouteRecord],
}

impl<'a> RouteTable<'a> {
    pub fn new(routes: &'a [RouteRecord]) -> Self {
        Self { routes }
    }

    /// Finds the distance between two locations regardless of direction.
    /// Inputs are trimmed and compared case-insensitively. Returns `None`
    /// when either input is blank or no record matches.
    pub fn resolve(&self, origin: &str, destination: &str) -> Option<f64> {
        let from = normalize(origin);
        let to = normalize(destination);
        if from.is_empty() || to.is_empty() {
            return None;
        }

        self.routes
            .iter()
            .find(|r| {
                let a = normalize(&r.origin);
                let b = normalize(&r.destination);
                (a == from && b == to) || (a == to && b == from)
            })
            .map(|r| r.distance_km)
    }

    /// All distinct location names in the table, sorted so accented letters
    /// collate with their base letter instead of after 'z'. Dedup is
    /// case-sensitive: spellings that differ only in case both survive.
    pub fn known_locations(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in self.routes {
            for name in [&record.origin, &record.destination] {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names.sort_by(|a, b| collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b)));
        names
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lowercases and strips Latin diacritics so "São Paulo" sorts next to
/// "Salvador" rather than after "Vitória". Covers the accented letters that
/// occur in Portuguese place names.
fn collation_key(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
