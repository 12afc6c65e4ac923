use yahtzee_engine::hand::Hand;
use yahtzee_engine::rules::{is_straight, standard_rules, Rule};

fn hand(faces: &[u8]) -> Hand {
    Hand::from_faces(faces, 6, 0).expect("valid faces")
}

fn score(name: &str, faces: &[u8]) -> u32 {
    let rule = standard_rules()
        .into_iter()
        .find(|r| r.name() == name)
        .unwrap_or_else(|| panic!("no rule named {}", name));
    rule.points_for(&hand(faces))
}

#[test]
fn five_aces() {
    assert_eq!(score("Yahtzee", &[1, 1, 1, 1, 1]), 50);
    assert_eq!(score("Aces", &[1, 1, 1, 1, 1]), 5);
    assert_eq!(score("Four of a kind", &[1, 1, 1, 1, 1]), 5);
}

#[test]
fn single_sided_dice_always_make_yahtzee() {
    let mut h = Hand::new_with_seed(5, 1, 77).unwrap();
    h.roll_all();
    assert_eq!(h.snapshot(), vec![1, 1, 1, 1, 1]);
    assert_eq!(Rule::yahtzee().points_for(&h), 50);
}

#[test]
fn straight_hand_scores_both_straights() {
    assert_eq!(score("Large Straight", &[1, 2, 3, 4, 5]), 40);
    assert_eq!(score("Small Straight", &[1, 2, 3, 4, 5]), 30);
    assert_eq!(score("Large Straight", &[3, 5, 2, 4, 1]), 40);
}

#[test]
fn full_house_hand() {
    assert_eq!(score("Full House", &[2, 2, 3, 3, 3]), 25);
    assert_eq!(score("Three of a kind", &[2, 2, 3, 3, 3]), 13);
    assert_eq!(score("Twos", &[2, 2, 3, 3, 3]), 4);
    assert_eq!(score("Threes", &[2, 2, 3, 3, 3]), 9);
}

#[test]
fn fibonyahtzee_hand() {
    assert_eq!(score("FibonYahtzee", &[1, 1, 2, 3, 5]), 100);
    assert_eq!(score("FibonYahtzee", &[3, 1, 5, 2, 1]), 100);
    assert_eq!(score("Chance", &[1, 1, 2, 3, 5]), 12);
    assert_eq!(score("Small Straight", &[1, 1, 2, 3, 5]), 0);
}

#[test]
fn scoring_does_not_touch_hand() {
    let h = hand(&[6, 6, 6, 2, 2]);
    for rule in standard_rules() {
        let first = rule.points_for(&h);
        let second = rule.points_for(&h);
        assert_eq!(first, second, "rule {} is not deterministic", rule.name());
    }
    assert_eq!(h.snapshot(), vec![6, 6, 6, 2, 2]);
}

#[test]
fn straight_helper_matches_sort_and_scan() {
    // exhaustive over 4- and 5-element selections of 1..=6
    fn scan(values: &[u8]) -> bool {
        let mut v = values.to_vec();
        v.sort_unstable();
        v.windows(2).all(|w| w[1] == w[0] + 1)
    }
    for a in 1u8..=6 {
        for b in 1u8..=6 {
            for c in 1u8..=6 {
                for d in 1u8..=6 {
                    let four = [a, b, c, d];
                    assert_eq!(is_straight(&four), scan(&four), "{:?}", four);
                    for e in 1u8..=6 {
                        let five = [a, b, c, d, e];
                        assert_eq!(is_straight(&five), scan(&five), "{:?}", five);
                    }
                }
            }
        }
    }
}

#[test]
fn four_dice_small_straight_uses_whole_hand() {
    let four = Hand::from_faces(&[3, 4, 5, 6], 6, 0).unwrap();
    assert_eq!(Rule::small_straight().points_for(&four), 30);
    let gap = Hand::from_faces(&[3, 4, 5, 5], 6, 0).unwrap();
    assert_eq!(Rule::small_straight().points_for(&gap), 0);
}
