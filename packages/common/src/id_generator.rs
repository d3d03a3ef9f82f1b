use chrono::Utc;

/// Generates component ids of the shape `<lowercased-type>_<token>`.
///
/// Tokens start at the wall-clock epoch milliseconds and are strictly
/// increasing per generator, so two ids issued within the same millisecond
/// never collide.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next numeric token
    pub fn next_token(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last
    }

    /// Generate the next id for a component type
    pub fn new_id(&mut self, component_type: &str) -> String {
        format!("{}_{}", component_type.to_lowercase(), self.next_token())
    }

    /// Last issued token (0 before the first id)
    pub fn last_token(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let mut gen = IdGenerator::new();
        let id = gen.new_id("Button");

        let (prefix, token) = id.split_once('_').unwrap();
        assert_eq!(prefix, "button");
        assert!(!token.is_empty());
        assert!(token.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_tokens_strictly_increase() {
        let mut gen = IdGenerator::new();
        let tokens: Vec<u64> = (0..1000).map(|_| gen.next_token()).collect();

        assert!(tokens.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(gen.last_token(), *tokens.last().unwrap());
    }

    #[test]
    fn test_rapid_ids_are_unique() {
        let mut gen = IdGenerator::new();
        let a = gen.new_id("Card");
        let b = gen.new_id("Card");
        assert_ne!(a, b);
    }
}
