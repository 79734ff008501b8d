//! Property tests for plural-rule selection

use proptest::prelude::*;
use tslate::PluralRule;

const ALL_RULES: [PluralRule; 6] = [
    PluralRule::SingleForm,
    PluralRule::OneOther,
    PluralRule::ZeroOne,
    PluralRule::Slavic,
    PluralRule::CzechSlovak,
    PluralRule::Polish,
];

proptest! {
    #[test]
    fn index_is_always_within_forms(n in any::<u64>()) {
        for rule in ALL_RULES {
            prop_assert!(rule.index(n) < rule.forms());
        }
    }

    #[test]
    fn slavic_rule_matches_mod_arithmetic(n in any::<u64>()) {
        let expected = if n % 10 == 1 && n % 100 != 11 {
            0
        } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
            1
        } else {
            2
        };
        prop_assert_eq!(PluralRule::Slavic.index(n), expected);
    }

    #[test]
    fn rule_depends_only_on_language(lang in "[a-z]{2}", n in any::<u64>()) {
        let rule = PluralRule::for_language(&lang);
        prop_assert_eq!(rule.index(n), PluralRule::for_language(&lang).index(n));
    }
}

#[test]
fn three_form_scenario_from_the_data() {
    // the Ukrainian files carry three numerusforms per plural message
    let rule = PluralRule::for_language("uk");
    assert_eq!(rule.forms(), 3);
    assert_eq!(rule.index(1), 0);
    assert_eq!(rule.index(2), 1);
    assert_eq!(rule.index(5), 2);
    assert_eq!(rule.index(11), 2);
}

#[test]
fn single_form_scenario_from_the_data() {
    // the Vietnamese files carry one form per plural message
    let rule = PluralRule::for_language("vi");
    assert_eq!(rule.forms(), 1);
    for n in 0..200 {
        assert_eq!(rule.index(n), 0);
    }
}
