//! Component complexity scoring.

use serde::Serialize;

use crate::types::Component;

pub const PROP_WEIGHT: usize = 2;
pub const VARIANT_WEIGHT: usize = 3;
pub const CHILDREN_WEIGHT: usize = 5;
pub const EXAMPLE_WEIGHT: usize = 1;

/// Scores below this are simple.
pub const MODERATE_THRESHOLD: usize = 5;
/// Scores at or above this are complex.
pub const COMPLEX_THRESHOLD: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Self::Simple, Self::Moderate, Self::Complex];

    pub fn from_score(score: usize) -> Self {
        if score < MODERATE_THRESHOLD {
            Self::Simple
        } else if score < COMPLEX_THRESHOLD {
            Self::Moderate
        } else {
            Self::Complex
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityScore {
    pub score: usize,
    pub band: Complexity,
}

impl ComplexityScore {
    pub fn of(component: &Component) -> Self {
        let children = if component.has_children() {
            CHILDREN_WEIGHT
        } else {
            0
        };
        let score = PROP_WEIGHT * component.props.len()
            + VARIANT_WEIGHT * component.variants.len()
            + children
            + EXAMPLE_WEIGHT * component.examples.len();
        Self {
            score,
            band: Complexity::from_score(score),
        }
    }
}

impl Component {
    pub fn complexity(&self) -> Complexity {
        ComplexityScore::of(self).band
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Prop;
    use serde_json::json;

    fn component(props: usize, variants: usize, examples: usize) -> Component {
        let mut component = Component::new("Sample");
        component.props = (0..props).map(|i| Prop::new(format!("p{i}"))).collect();
        component.variants = (0..variants).map(|i| json!(format!("v{i}"))).collect();
        component.examples = (0..examples).map(|i| json!({ "title": format!("e{i}") })).collect();
        component
    }

    #[test]
    fn empty_component_is_simple() {
        let score = ComplexityScore::of(&component(0, 0, 0));
        assert_eq!(score.score, 0);
        assert_eq!(score.band, Complexity::Simple);
    }

    #[test]
    fn three_props_is_moderate() {
        let score = ComplexityScore::of(&component(3, 0, 0));
        assert_eq!(score.score, 6);
        assert_eq!(score.band, Complexity::Moderate);
    }

    #[test]
    fn five_variants_is_complex_at_boundary() {
        let score = ComplexityScore::of(&component(0, 5, 0));
        assert_eq!(score.score, 15);
        assert_eq!(score.band, Complexity::Complex);
    }

    #[test]
    fn children_and_examples_add_weight() {
        let mut sample = component(0, 0, 4);
        assert_eq!(ComplexityScore::of(&sample).score, 4);
        assert_eq!(sample.complexity(), Complexity::Simple);
        sample.children = Some(json!(true));
        assert_eq!(ComplexityScore::of(&sample).score, 9);
        assert_eq!(sample.complexity(), Complexity::Moderate);
    }

    #[test]
    fn band_edges() {
        assert_eq!(Complexity::from_score(4), Complexity::Simple);
        assert_eq!(Complexity::from_score(5), Complexity::Moderate);
        assert_eq!(Complexity::from_score(14), Complexity::Moderate);
        assert_eq!(Complexity::from_score(15), Complexity::Complex);
    }
}
