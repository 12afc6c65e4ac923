use serde::{Deserialize, Serialize};

use crate::hand::Hand;

/// Points for a full house.
pub const FULL_HOUSE_POINTS: u32 = 25;
/// Points for a small straight.
pub const SMALL_STRAIGHT_POINTS: u32 = 30;
/// Points for a large straight.
pub const LARGE_STRAIGHT_POINTS: u32 = 40;
/// Points for all dice showing the same face.
pub const YAHTZEE_POINTS: u32 = 50;
/// Points for the FibonYahtzee pattern.
pub const FIBONYAHTZEE_POINTS: u32 = 100;
/// Faces that make up a FibonYahtzee.
pub const FIBONYAHTZEE_TARGET: [u8; 5] = [1, 1, 2, 3, 5];

/// Which straight a [`RuleKind::Straight`] rule looks for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StraightKind {
    /// A run of four: the full hand when it has four dice, or the sorted
    /// hand with either end dropped when it has five.
    Small,
    /// Every die in one run.
    Large,
}

/// The scoring shape of a rule, with its parameters.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    /// `count(value) * value`
    SameValue { value: u8 },
    /// Sum of all dice when some face shows at least `count` times.
    OfAKind { count: usize },
    /// Fixed points when the hand holds a pair and a triple.
    FullHouse,
    Straight { length: StraightKind },
    /// Fixed points when every die shows the same face.
    AllEqual,
    /// `bonus` when the sorted faces equal the sorted `target`.
    ExactMultiset { target: Vec<u8>, bonus: u32 },
    /// Sum of all dice.
    Chance,
}

/// A named scoring category.
///
/// Rules are stateless: [`Rule::points`] is a pure function of the face
/// values it is given and never touches the hand they came from.
///
/// # Examples
///
/// ```
/// use yahtzee_engine::rules::Rule;
///
/// let full_house = Rule::full_house();
/// assert_eq!(full_house.points(&[2, 2, 3, 3, 3]), 25);
/// assert_eq!(full_house.points(&[2, 2, 3, 3, 4]), 0);
///
/// let threes = Rule::same_value("Threes", 3);
/// assert_eq!(threes.points(&[3, 1, 3, 6, 3]), 9);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rule {
    name: String,
    kind: RuleKind,
}

impl Rule {
    pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn same_value(name: impl Into<String>, value: u8) -> Self {
        Self::new(name, RuleKind::SameValue { value })
    }

    pub fn of_a_kind(name: impl Into<String>, count: usize) -> Self {
        Self::new(name, RuleKind::OfAKind { count })
    }

    pub fn full_house() -> Self {
        Self::new("Full House", RuleKind::FullHouse)
    }

    pub fn small_straight() -> Self {
        Self::new(
            "Small Straight",
            RuleKind::Straight {
                length: StraightKind::Small,
            },
        )
    }

    pub fn large_straight() -> Self {
        Self::new(
            "Large Straight",
            RuleKind::Straight {
                length: StraightKind::Large,
            },
        )
    }

    pub fn yahtzee() -> Self {
        Self::new("Yahtzee", RuleKind::AllEqual)
    }

    /// An exact-pattern rule awarding `bonus` for one specific multiset of faces.
    pub fn exact(name: impl Into<String>, target: &[u8], bonus: u32) -> Self {
        Self::new(
            name,
            RuleKind::ExactMultiset {
                target: target.to_vec(),
                bonus,
            },
        )
    }

    pub fn fibonyahtzee() -> Self {
        Self::exact("FibonYahtzee", &FIBONYAHTZEE_TARGET, FIBONYAHTZEE_POINTS)
    }

    pub fn chance() -> Self {
        Self::new("Chance", RuleKind::Chance)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Points this rule awards for the given face values.
    pub fn points(&self, faces: &[u8]) -> u32 {
        match &self.kind {
            RuleKind::SameValue { value } => same_value_points(faces, *value),
            RuleKind::OfAKind { count } => of_a_kind_points(faces, *count),
            RuleKind::FullHouse => {
                if is_full_house(faces) {
                    FULL_HOUSE_POINTS
                } else {
                    0
                }
            }
            RuleKind::Straight {
                length: StraightKind::Small,
            } => {
                if is_small_straight(faces) {
                    SMALL_STRAIGHT_POINTS
                } else {
                    0
                }
            }
            RuleKind::Straight {
                length: StraightKind::Large,
            } => {
                if is_straight(faces) {
                    LARGE_STRAIGHT_POINTS
                } else {
                    0
                }
            }
            RuleKind::AllEqual => {
                if is_all_equal(faces) {
                    YAHTZEE_POINTS
                } else {
                    0
                }
            }
            RuleKind::ExactMultiset { target, bonus } => {
                if matches_multiset(faces, target) {
                    *bonus
                } else {
                    0
                }
            }
            RuleKind::Chance => sum(faces),
        }
    }

    /// Points for the current faces of `hand`.
    pub fn points_for(&self, hand: &Hand) -> u32 {
        self.points(&hand.snapshot())
    }
}

/// The fourteen-category table: upper section, the pattern rules,
/// FibonYahtzee and Chance.
pub fn standard_rules() -> Vec<Rule> {
    vec![
        Rule::same_value("Aces", 1),
        Rule::same_value("Twos", 2),
        Rule::same_value("Threes", 3),
        Rule::same_value("Fours", 4),
        Rule::same_value("Fives", 5),
        Rule::same_value("Sixes", 6),
        Rule::of_a_kind("Three of a kind", 3),
        Rule::of_a_kind("Four of a kind", 4),
        Rule::full_house(),
        Rule::small_straight(),
        Rule::large_straight(),
        Rule::yahtzee(),
        Rule::fibonyahtzee(),
        Rule::chance(),
    ]
}

/// True when `values` has no duplicates and forms one contiguous run.
///
/// A duplicate-free set is contiguous exactly when its sum equals the
/// arithmetic series `min..=max`, so no adjacency scan is needed.
pub fn is_straight(values: &[u8]) -> bool {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return false;
    };
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return false;
    }
    let (min, max) = (u32::from(min), u32::from(max));
    let series = (min + max) * (max - min + 1) / 2;
    sum(values) == series
}

fn is_small_straight(faces: &[u8]) -> bool {
    let mut sorted = faces.to_vec();
    sorted.sort_unstable();
    match sorted.len() {
        4 => is_straight(&sorted),
        5 => is_straight(&sorted[1..]) || is_straight(&sorted[..4]),
        _ => false,
    }
}

fn sum(faces: &[u8]) -> u32 {
    faces.iter().map(|&f| u32::from(f)).sum()
}

fn count(faces: &[u8], value: u8) -> usize {
    faces.iter().filter(|&&f| f == value).count()
}

fn same_value_points(faces: &[u8], value: u8) -> u32 {
    count(faces, value) as u32 * u32::from(value)
}

fn of_a_kind_points(faces: &[u8], n: usize) -> u32 {
    if faces.iter().any(|&f| count(faces, f) >= n) {
        sum(faces)
    } else {
        0
    }
}

/// Occurrence count of every distinct face.
fn face_counts(faces: &[u8]) -> Vec<usize> {
    let mut distinct = faces.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.iter().map(|&f| count(faces, f)).collect()
}

fn is_full_house(faces: &[u8]) -> bool {
    let counts = face_counts(faces);
    counts.contains(&2) && counts.contains(&3)
}

fn is_all_equal(faces: &[u8]) -> bool {
    match faces.split_first() {
        Some((first, rest)) => rest.iter().all(|f| f == first),
        None => false,
    }
}

fn matches_multiset(faces: &[u8], target: &[u8]) -> bool {
    let mut a = faces.to_vec();
    let mut b = target.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
