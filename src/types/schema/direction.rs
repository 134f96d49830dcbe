/// Direction a relationship type is stored with in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    #[default]
    Directed,
    Undirected,
}

impl Direction {
    /// Parses a direction from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DIRECTED" => Some(Direction::Directed),
            "UNDIRECTED" => Some(Direction::Undirected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Directed => "DIRECTED",
            Direction::Undirected => "UNDIRECTED",
        }
    }

    pub fn is_undirected(&self) -> bool {
        matches!(self, Direction::Undirected)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        assert_eq!(Direction::parse("DIRECTED"), Some(Direction::Directed));
        assert_eq!(Direction::parse("undirected"), Some(Direction::Undirected));
        assert_eq!(Direction::parse("bogus"), None);
    }

    #[test]
    fn is_undirected() {
        assert!(!Direction::Directed.is_undirected());
        assert!(Direction::Undirected.is_undirected());
    }
}
