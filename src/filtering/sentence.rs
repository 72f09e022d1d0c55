//! sentence-level filtering
use super::Filter;

/// Length filter over Unicode codepoints.
///
/// Returns `false` if the provided sentence is shorter than [LengthBounds::min]
/// or longer than [LengthBounds::max] codepoints, bounds included.
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// specify both bounds
    pub fn with_bounds(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Get a reference to the minimum length.
    pub fn min(&self) -> &usize {
        &self.min
    }

    /// Get a reference to the maximum length.
    pub fn max(&self) -> &usize {
        &self.max
    }
}

impl Filter<&str> for LengthBounds {
    fn detect(&self, sentence: &str) -> bool {
        let length = sentence.chars().count();
        self.min <= length && length <= self.max
    }
}

impl Default for LengthBounds {
    /// Default bounds are 10 to 1000 Unicode codepoints
    fn default() -> Self {
        LengthBounds { min: 10, max: 1000 }
    }
}

/// Rejects sentences carrying TeX markup leaked from math templates.
#[derive(Default)]
pub struct MathFormula;

impl Filter<&str> for MathFormula {
    fn detect(&self, sentence: &str) -> bool {
        !sentence.contains(r"\displaystyle")
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, LengthBounds, MathFormula};

    #[test]
    fn length_default() {
        let valid: String = ['z'; 10].iter().collect();
        let too_short: String = ['z'; 9].iter().collect();
        let too_long: String = ['z'; 1001].iter().collect();

        let f = LengthBounds::default();
        assert_eq!(*f.min(), 10);
        assert_eq!(*f.max(), 1000);
        assert!(f.detect(&valid));
        assert!(!f.detect(&too_short));
        assert!(!f.detect(&too_long));
    }

    #[test]
    fn length_counts_codepoints() {
        // 5 characters, 15 bytes
        let f = LengthBounds::with_bounds(5, 5);
        assert!(f.detect("あいうえお"));
    }

    #[test]
    fn math_formula() {
        let f = MathFormula;
        assert!(!f.detect(r"{\displaystyle x^{2}} は二次式である。"));
        assert!(f.detect("普通の文である。"));
    }
}
